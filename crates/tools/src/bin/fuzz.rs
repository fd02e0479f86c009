use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::{AreaCoord, Cell, MapConfig, MapGenerator, SeededRandom};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    runs: u32,
}

fn pick(rng: &mut ChaCha8Rng, min: usize, max: usize) -> usize {
    min + rng.next_u64() as usize % (max - min + 1)
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting map fuzz harness on seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut generated = 0u32;
    let mut rejected = 0u32;
    let mut disconnected_floors = 0u32;
    for run in 0..args.runs {
        let config =
            MapConfig::new(pick(&mut rng, 16, 160), pick(&mut rng, 16, 96), pick(&mut rng, 1, 8));
        let map_seed = rng.next_u64();
        let generator = MapGenerator::new(config);

        let dungeon = match generator.generate_detailed(SeededRandom::new(map_seed)) {
            Ok(dungeon) => dungeon,
            Err(err) if err.is_configuration_error() => {
                rejected += 1;
                continue;
            }
            Err(err) => bail!("run {run}: unexpected error {err}"),
        };
        generated += 1;

        // Assert invariants
        let grid = &dungeon.grid;
        let layout = &dungeon.layout;
        let record = &dungeon.record;
        assert_eq!((grid.width(), grid.height()), (config.width, config.height));
        for room in &layout.rooms {
            assert!(room.width >= config.room_min && room.height >= config.room_min);
            for y in room.y..=room.bottom() {
                for x in room.x..=room.right() {
                    assert_eq!(grid.cell_state(x, y), Cell::Floor, "Invariant failed: bare room");
                }
            }
        }
        assert!(
            (0..layout.area_width).any(|ax| record.has_down_link(AreaCoord::new(ax, 0))),
            "Invariant failed: no vertical link (run {run}, seed {map_seed})"
        );
        for ax in 0..layout.area_width - 1 {
            assert!(
                (0..layout.area_height).any(|ay| record.has_right_link(AreaCoord::new(ax, ay))),
                "Invariant failed: columns {ax} and {} unlinked (run {run}, seed {map_seed})",
                ax + 1
            );
        }

        let again = generator.generate(SeededRandom::new(map_seed))?;
        assert_eq!(again.fingerprint(), grid.fingerprint(), "Invariant failed: unstable map");

        if !dungeon.floor_is_connected() {
            disconnected_floors += 1;
        }
    }

    println!("Generated {generated} maps, rejected {rejected} configurations.");
    println!("Maps with a disconnected floor: {disconnected_floors}");
    println!("Fuzzing completed successfully.");
    Ok(())
}
