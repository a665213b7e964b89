use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use qr_encode::encoder::{
    append_bytes, append_eci, append_length_info, append_mode_info, choose_mode, terminate_bits,
};
use qr_encode::tools::{
    bit_vector_bytes, codewords_to_matrix, matrix_stats, parse_hex, render_bit_matrix, save_png,
    to_hex,
};
use qr_encode::{BitVector, CharacterSetEci, Mode, ReedSolomonEncoder, interleave_with_ec_bytes};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR encoding CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Append Reed-Solomon EC codewords to hex data
    Ec {
        #[arg(long)]
        data: String,
        #[arg(long)]
        ec_bytes: usize,
    },
    /// Look up a mode by its 4-bit indicator
    Mode {
        #[arg(long)]
        bits: u8,
        #[arg(long)]
        version: Option<u32>,
    },
    /// Look up an ECI designator by character set name
    Eci {
        #[arg(long)]
        name: String,
    },
    /// Assemble, terminate and optionally interleave a text payload
    Payload {
        #[arg(long)]
        text: String,
        #[arg(long)]
        version: u32,
        #[arg(long)]
        data_bytes: usize,
        #[arg(long)]
        total_bytes: Option<usize>,
        #[arg(long, default_value_t = 1)]
        blocks: usize,
        /// Character set name; emits an ECI header before the data
        #[arg(long)]
        charset: Option<String>,
        #[arg(long)]
        png: Option<PathBuf>,
        #[arg(long, default_value_t = 4)]
        scale: u32,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Ec { data, ec_bytes } => ec_cmd(&data, ec_bytes),
        Command::Mode { bits, version } => mode_cmd(bits, version),
        Command::Eci { name } => eci_cmd(&name),
        Command::Payload {
            text,
            version,
            data_bytes,
            total_bytes,
            blocks,
            charset,
            png,
            scale,
        } => payload_cmd(
            &text,
            version,
            data_bytes,
            total_bytes.map(|total| (total, blocks)),
            charset.as_deref(),
            png.as_deref(),
            scale,
        ),
    }
}

fn ec_cmd(data: &str, ec_bytes: usize) -> Result<()> {
    let data = parse_hex(data).with_context(|| format!("invalid hex: {}", data))?;
    let mut codewords = data.clone();
    codewords.resize(data.len() + ec_bytes, 0);
    let mut encoder = ReedSolomonEncoder::qr();
    encoder
        .encode(&mut codewords, ec_bytes)
        .context("Reed-Solomon encoding failed")?;
    println!("Data: {}", to_hex(&codewords[..data.len()]));
    println!("EC:   {}", to_hex(&codewords[data.len()..]));
    Ok(())
}

fn mode_cmd(bits: u8, version: Option<u32>) -> Result<()> {
    let mode = Mode::for_bits(bits)?;
    println!("Mode: {} (indicator {:04b})", mode, mode.bits());
    match mode.character_count_table() {
        Some(table) => println!("Count bits (v1-9, v10-26, v27-40): {:?}", table),
        None => println!("Count bits: none"),
    }
    if let Some(version) = version {
        let count_bits = mode.character_count_bits(version)?;
        println!("Count bits at version {}: {}", version, count_bits);
    }
    Ok(())
}

fn eci_cmd(name: &str) -> Result<()> {
    let eci = CharacterSetEci::by_name(name)
        .with_context(|| format!("no ECI designator for {}", name))?;
    println!("{}", eci);
    Ok(())
}

fn payload_cmd(
    text: &str,
    version: u32,
    data_bytes: usize,
    layout: Option<(usize, usize)>,
    charset: Option<&str>,
    png: Option<&Path>,
    scale: u32,
) -> Result<()> {
    let mode = choose_mode(text);
    info!("encoding {} chars in {} mode at version {}", text.chars().count(), mode, version);

    let mut bits = BitVector::new();
    if let Some(name) = charset {
        let eci = CharacterSetEci::by_name(name)
            .with_context(|| format!("no ECI designator for {}", name))?;
        append_eci(&eci, &mut bits)?;
    }
    let num_letters = if mode == Mode::Byte {
        text.len()
    } else {
        text.chars().count()
    };
    append_mode_info(mode, &mut bits)?;
    append_length_info(num_letters, version, mode, &mut bits)
        .with_context(|| format!("{} characters do not fit version {}", num_letters, version))?;
    append_bytes(text, mode, &mut bits)?;
    println!("Mode: {}", mode);
    println!("Payload bits: {}", bits.size());

    terminate_bits(data_bytes, &mut bits)
        .with_context(|| format!("payload does not fit {} data bytes", data_bytes))?;

    let final_bits = match layout {
        Some((total, blocks)) => {
            interleave_with_ec_bytes(&bits, total, data_bytes, blocks).with_context(|| {
                format!("cannot split {} codewords into {} blocks", total, blocks)
            })?
        }
        None => bits,
    };
    let codewords = bit_vector_bytes(&final_bits);
    println!("Codewords: {}", to_hex(&codewords));

    if let Some(path) = png {
        let matrix = codewords_to_matrix(&codewords)?;
        let stats = matrix_stats(&matrix);
        let img = render_bit_matrix(&matrix, scale, 1);
        save_png(&img, path).with_context(|| format!("failed to write {}", path.display()))?;
        println!(
            "Wrote {} ({} dark of {} modules, {:.1}%)",
            path.display(),
            stats.dark_modules,
            stats.total_modules,
            stats.dark_ratio * 100.0
        );
    }
    Ok(())
}
