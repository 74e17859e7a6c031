use anyhow::{Result, ensure};
use clap::Parser;
use log::{LevelFilter, debug, info};
use quicksort::{Rendered, is_sorted, sort_with_rng};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sort integer sequences with the randomized hybrid quicksort and print them
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated values to sort instead of the built-in scenarios
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "random")]
    values: Option<Vec<i32>>,

    /// Sort this many randomly generated values instead of the built-in scenarios
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Smallest generated value
    #[arg(long, default_value_t = -1000, allow_hyphen_values = true)]
    min: i32,

    /// Largest generated value
    #[arg(long, default_value_t = 1000, allow_hyphen_values = true)]
    max: i32,

    /// Seed for pivot selection and value generation
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct Scenario {
    label: &'static str,
    data: Vec<i32>,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            label: "random order",
            data: vec![10, 7, 8, 9, 1, 5, 2, 3, 6, 4],
        },
        Scenario {
            label: "already sorted",
            data: (1..=10).collect(),
        },
        Scenario {
            label: "reverse sorted",
            data: (1..=10).rev().collect(),
        },
        Scenario {
            label: "empty",
            data: Vec::new(),
        },
        Scenario {
            label: "single element",
            data: vec![42],
        },
    ]
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn run_scenario<R: Rng + ?Sized>(scenario: &mut Scenario, rng: &mut R) -> Result<()> {
    println!("{} - before:", scenario.label);
    println!("{}", Rendered(&scenario.data));

    sort_with_rng(&mut scenario.data, rng);
    ensure!(
        is_sorted(&scenario.data),
        "{} was not sorted: {}",
        scenario.label,
        Rendered(&scenario.data)
    );

    println!("{} - after:", scenario.label);
    println!("{}", Rendered(&scenario.data));
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(level_for(args.verbose))
        .parse_default_env()
        .init();

    ensure!(
        args.min <= args.max,
        "--min ({}) must not exceed --max ({})",
        args.min,
        args.max
    );

    let mut rng = match args.seed {
        Some(seed) => {
            info!("using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut runs = if let Some(values) = args.values {
        vec![Scenario {
            label: "values",
            data: values,
        }]
    } else if let Some(n) = args.random {
        debug!("generating {n} values in {}..={}", args.min, args.max);
        let data = (0..n)
            .map(|_| rng.random_range(args.min..=args.max))
            .collect();
        vec![Scenario {
            label: "random values",
            data,
        }]
    } else {
        scenarios()
    };

    for (i, scenario) in runs.iter_mut().enumerate() {
        if i > 0 {
            println!();
        }
        run_scenario(scenario, &mut rng)?;
    }

    Ok(())
}
