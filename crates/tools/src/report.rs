//! Summary of one generation run, printed as text or JSON.

use dungeon_core::mapgen::{RepairReport, Room};
use dungeon_core::{AreaCoord, GeneratedDungeon, MapConfig};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub seed: u64,
    pub config: MapConfig,
    pub area_width: usize,
    pub area_height: usize,
    pub rooms: Vec<Room>,
    pub links: Vec<(AreaCoord, AreaCoord)>,
    pub repair: RepairReport,
    pub floor_cells: usize,
    pub area_graph_connected: bool,
    pub floor_connected: bool,
    pub fingerprint: String,
}

impl GenerationReport {
    pub fn new(seed: u64, config: MapConfig, dungeon: &GeneratedDungeon) -> Self {
        Self {
            seed,
            config,
            area_width: dungeon.layout.area_width,
            area_height: dungeon.layout.area_height,
            rooms: dungeon.layout.rooms.clone(),
            links: dungeon.record.links(),
            repair: dungeon.repair.clone(),
            floor_cells: dungeon.grid.floor_count(),
            area_graph_connected: dungeon.record.is_area_graph_connected(),
            floor_connected: dungeon.floor_is_connected(),
            fingerprint: format!("{:016x}", dungeon.grid.fingerprint()),
        }
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("Seed: {}", self.seed),
            format!(
                "Map: {}x{} (room_min {})",
                self.config.width, self.config.height, self.config.room_min
            ),
            format!("Areas: {}x{}", self.area_width, self.area_height),
            format!("Rooms: {}", self.rooms.len()),
            format!("Links: {}", self.links.len()),
        ];
        match self.repair.repaired_column {
            Some(column) => lines.push(format!(
                "Repair: columns {:?} unlinked, forced column {column}",
                self.repair.missing_columns
            )),
            None => lines.push("Repair: every column linked".to_string()),
        }
        for (column, row) in &self.repair.repaired_rows {
            lines.push(format!("Repair: forced columns {column}-{} on row {row}", column + 1));
        }
        lines.push(format!("Floor cells: {}", self.floor_cells));
        lines.push(format!("Area graph connected: {}", self.area_graph_connected));
        lines.push(format!("Floor connected: {}", self.floor_connected));
        lines.push(format!("Fingerprint: {}", self.fingerprint));
        lines.join("\n")
    }
}
