use std::env;

use anyhow::{anyhow, Result};
use rand::Rng;

use line_code_encoder::encoder::{encode, Scheme};
use line_code_encoder::export::{chart_dump, scheme_dump, write_chart_json};
use line_code_encoder::wav_writer::{
    generate_wav, GenerateConfig, DEFAULT_SAMPLES_PER_BIT, DEFAULT_SAMPLE_RATE,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }

    let mut bits = "1011001011".to_string();
    let mut scheme_arg = "all".to_string();
    let mut out = None;
    let mut samples_per_bit = DEFAULT_SAMPLES_PER_BIT;
    let mut sample_rate = DEFAULT_SAMPLE_RATE;
    let mut gain = 1.0f32;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bits" => {
                i += 1;
                bits = args.get(i).cloned().ok_or_else(|| anyhow!("missing bits"))?;
            }
            "--random" => {
                i += 1;
                let n = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing random length"))?
                    .parse::<usize>()?;
                let mut rng = rand::thread_rng();
                bits = (0..n).map(|_| if rng.gen::<bool>() { '1' } else { '0' }).collect();
            }
            "--scheme" => {
                i += 1;
                scheme_arg = args
                    .get(i)
                    .cloned()
                    .ok_or_else(|| anyhow!("missing scheme"))?;
            }
            "--out" => {
                i += 1;
                out = args.get(i).cloned();
            }
            "--samples-per-bit" => {
                i += 1;
                samples_per_bit = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing samples per bit"))?
                    .parse::<usize>()?;
            }
            "--rate" => {
                i += 1;
                sample_rate = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing sample rate"))?
                    .parse::<u32>()?;
            }
            "--gain" => {
                i += 1;
                gain = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing gain"))?
                    .parse::<f32>()?;
            }
            "--list" => {
                for scheme in Scheme::ALL {
                    println!("{:<16} {}", scheme.name(), scheme.label());
                }
                return Ok(());
            }
            other => {
                return Err(anyhow!("unknown arg: {}", other));
            }
        }
        i += 1;
    }

    let scheme = if scheme_arg == "all" {
        None
    } else {
        Some(scheme_arg.parse::<Scheme>().map_err(|e| anyhow!(e))?)
    };

    match out {
        Some(path) if path.ends_with(".wav") => {
            let scheme = scheme
                .ok_or_else(|| anyhow!("--scheme all cannot be rendered to a single wav"))?;
            let config = GenerateConfig {
                bits: bits.clone(),
                scheme,
                samples_per_bit,
                sample_rate,
                output_gain: gain,
            };
            generate_wav(&config, &path, |_| {})?;
            println!("{} bits as {} -> {}", bits.len(), scheme, path);
        }
        Some(path) => {
            let dump = match scheme {
                Some(scheme) => scheme_dump(scheme, &bits)?,
                None => chart_dump(&bits)?,
            };
            write_chart_json(&path, &dump)?;
            println!("{} bits, {} track(s) -> {}", bits.len(), dump.tracks.len(), path);
        }
        None => {
            let schemes: Vec<Scheme> = match scheme {
                Some(scheme) => vec![scheme],
                None => Scheme::ALL.to_vec(),
            };
            println!("bits: {}", bits);
            for scheme in schemes {
                let wave = encode(scheme, &bits)?;
                println!();
                println!("{}", scheme);
                for (t, level) in wave.times.iter().zip(wave.levels.iter()) {
                    println!("  {:5.1}  {:+.1}", t, level);
                }
            }
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!("Usage: line-code-cli [--bits 1011001011] [--random N] [--scheme unipolar|nrz-l|nrz-i|rz|manchester|diff-manchester|all] [--out wave.json|wave.wav] [--samples-per-bit 192] [--rate 48000] [--gain x] [--list]");
}
