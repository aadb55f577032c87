//! Gridwalker CLI - Run an evolution from a maze file and JSON configuration.

use std::fs;
use std::path::PathBuf;

use gridwalker::{
    schema::{Maze, SimulationConfig},
    sim::SimulationRunner,
    stats::{StatsSeries, StatsWriter},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <maze.txt> [config.json]", args[0]);
        eprintln!();
        eprintln!("Evolve a maze walker and write per-generation statistics.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  maze.txt     Maze grid, one row per line (symbols: . A V X M R)");
        eprintln!("  config.json  Optional simulation configuration");
        eprintln!();
        eprintln!("Example maze and configuration are printed with --example.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example();
        return;
    }

    let maze_path = PathBuf::from(&args[1]);
    let maze_text = fs::read_to_string(&maze_path).unwrap_or_else(|e| {
        eprintln!("Error reading maze file: {}", e);
        std::process::exit(1);
    });
    let maze = Maze::parse(&maze_text).unwrap_or_else(|e| {
        eprintln!("Error parsing maze: {}", e);
        std::process::exit(1);
    });

    let config: SimulationConfig = match args.get(2) {
        Some(path) => {
            let config_str = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config file: {}", e);
                std::process::exit(1);
            });
            serde_json::from_str(&config_str).unwrap_or_else(|e| {
                eprintln!("Error parsing config: {}", e);
                std::process::exit(1);
            })
        }
        None => SimulationConfig::default(),
    };

    println!("Gridwalker Simulation");
    println!("=====================");
    println!("Maze: {}x{}", maze.width(), maze.height());
    println!("Origin: {:?}", config.origin);
    println!("Mutation rate: {}", config.mutation_rate);
    println!("Time limit: {}s", config.time_limit_secs);
    println!();

    // Validate the run before touching the statistics file: a rejected maze
    // or config must leave the previous run's statistics intact.
    let stats_path = config.stats_path.clone();
    let mut runner = SimulationRunner::new(config, maze).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let mut sink = StatsWriter::create(&stats_path).unwrap_or_else(|e| {
        eprintln!("Error creating statistics file: {}", e);
        std::process::exit(1);
    });

    println!("Goal at {:?}", runner.goal());
    println!("Running evolution...");

    let report = runner.run_with_callback(&mut sink, |record| {
        if record.arrived || record.generation % 100 == 0 {
            println!(
                "  Generación {}: pasos={}, puntos={}, meta={}",
                record.generation,
                record.steps,
                record.score,
                if record.arrived { "Sí" } else { "No" }
            );
        }
    });

    println!();
    println!("Stopped: {:?}", report.stop_reason);
    println!("Generations: {}", report.generations);
    println!("Best fitness: {:.2}", report.best_fitness);
    println!("Elapsed: {:.2}s", report.elapsed_seconds);
    println!();

    // Read the statistics back the way the chart window does.
    match StatsSeries::from_path(&stats_path).map(|series| series.summary()) {
        Ok(Some(summary)) => {
            println!("Resumen de Estadísticas");
            println!("-----------------------");
            print!("{}", summary);
        }
        Ok(None) => println!("No statistics were recorded."),
        Err(e) => eprintln!("Error al procesar las estadísticas: {}", e),
    }
}


fn print_example() {
    let config = SimulationConfig::default();

    println!("Example maze (maze.txt):");
    println!("..A..");
    println!(".R.V.");
    println!(".R.X.");
    println!("A..R.");
    println!("..R.M");
    println!();
    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
