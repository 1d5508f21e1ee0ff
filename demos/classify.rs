use clap::Parser;
use log::info;

use lut_rs::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Truth tables in hexadecimal, most-significant nibble first (e.g. `8000` for AND4).
    #[arg(value_name = "HEX", required = true)]
    tables: Vec<String>,

    /// Also report the two-input simplification of every pair of inputs.
    #[clap(long)]
    pairs: bool,

    /// Log level.
    #[clap(long, value_name = "LEVEL", default_value = "info")]
    log: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    info!("args = {:?}", args);

    for table in &args.tables {
        let lut: Lut = table.parse()?;
        let n = lut.input_count();

        println!("{}", lut);
        println!("  inputs   = {}", n);
        println!("  set bits = {} / {}", lut.count_set_bits(), lut.bit_count());
        println!("  npn      = {}", lut.pseudo_representant());
        if lut.is_constant() {
            println!("  constant");
        }
        if lut.is_generalized_and() {
            println!("  generalized AND");
        }
        if lut.is_generalized_xor() {
            println!("  generalized XOR");
        }

        for k in 0..n {
            let simplification = lut.single_input_simplification(k)?;
            let unateness = if lut.is_unate_polarity(k, true)? {
                "positive"
            } else if lut.is_unate_polarity(k, false)? {
                "negative"
            } else {
                "binate"
            };
            println!("  x{}: {:?}, {}", k, simplification, unateness);
        }

        if args.pairs {
            for i in 0..n {
                for j in i + 1..n {
                    let simplification = lut.two_input_simplification(i, j)?;
                    if simplification != TwoInputSimplification::None {
                        println!("  (x{}, x{}): {:?}", i, j, simplification);
                    }
                }
            }
        }

        println!(
            "  factorization: single = {}, pair = {}",
            lut.has_single_input_factorization(),
            lut.has_two_input_factorization()
        );
    }

    Ok(())
}
