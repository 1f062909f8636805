//! Command-line interface for `rijndael-core`.

#![forbid(unsafe_code)]

use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_core::{decrypt_block, encrypt_block, expand_key, Block, KeySize, RoundKeys};

/// AES block cipher CLI.
#[derive(Parser)]
#[command(name = "rijndael", version, about = "AES-128/192/256 single-block cipher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Enc {
        /// Key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one 16-byte block.
    Dec {
        /// Key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Verify the FIPS-197 vectors and random round trips for every key size.
    Check {
        /// Number of random round trips per key size.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt and decrypt a random block under a random key.
    Demo {
        /// Key size in bits.
        #[arg(long, default_value = "128", value_parser = parse_key_bits)]
        bits: KeySize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// FIPS-197 Appendix C: (key, plaintext, ciphertext).
const KNOWN_ANSWERS: [(&str, &str, &str); 3] = [
    (
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "00112233445566778899aabbccddeeff",
        "dda97ca4864cdfe06eaf70a0ec0d7191",
    ),
    (
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "00112233445566778899aabbccddeeff",
        "8ea2b7ca516745bfeafc49904b496089",
    ),
];

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc { key_hex, block_hex } => cmd_enc(&key_hex, &block_hex),
        Commands::Dec { key_hex, block_hex } => cmd_dec(&key_hex, &block_hex),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { bits, seed } => cmd_demo(bits, seed),
    }
}

fn cmd_enc(key_hex: &str, block_hex: &str) -> Result<()> {
    let round_keys = parse_key_hex(key_hex)?;
    let block = decode_hex(block_hex, "block")?;
    let ct = encrypt_block(&block, &round_keys).context("encrypt block")?;
    println!("{}", hex::encode(ct));
    Ok(())
}

fn cmd_dec(key_hex: &str, block_hex: &str) -> Result<()> {
    let round_keys = parse_key_hex(key_hex)?;
    let block = decode_hex(block_hex, "block")?;
    let pt = decrypt_block(&block, &round_keys).context("decrypt block")?;
    println!("{}", hex::encode(pt));
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    for (key_hex, pt_hex, ct_hex) in KNOWN_ANSWERS {
        let round_keys = parse_key_hex(key_hex)?;
        let pt = decode_hex(pt_hex, "plaintext")?;
        let expected = decode_hex(ct_hex, "ciphertext")?;
        let ct = encrypt_block(&pt, &round_keys)?;
        if ct[..] != expected[..] {
            bail!("{} known-answer encryption mismatch", round_keys.key_size());
        }
        if decrypt_block(&ct, &round_keys)?[..] != pt[..] {
            bail!("{} known-answer decryption mismatch", round_keys.key_size());
        }
        info!("{} known-answer vector ok", round_keys.key_size());
    }

    let mut rng = seeded_rng(seed);
    for size in [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256] {
        for sample in 0..samples {
            let round_keys = random_round_keys(&mut rng, size)?;
            let block = random_block(&mut rng);
            let ct = encrypt_block(&block, &round_keys)?;
            if decrypt_block(&ct, &round_keys)? != block {
                bail!("{size} round trip failed on sample {sample}");
            }
        }
        debug!("{size}: {samples} random round trips ok");
    }

    println!("all checks passed");
    Ok(())
}

fn cmd_demo(size: KeySize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = vec![0u8; size.key_len()];
    rng.fill_bytes(&mut key);
    let round_keys = expand_key(&key).context("expand demo key")?;

    let block = random_block(&mut rng);
    let ct = encrypt_block(&block, &round_keys)?;
    let pt = decrypt_block(&ct, &round_keys)?;

    println!("demo cipher: {size}");
    println!("key: {}", hex::encode(&key));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ct));
    println!("decrypted: {}", hex::encode(pt));
    if pt != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn decode_hex(hex_str: &str, what: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))
}

fn parse_key_hex(hex_str: &str) -> Result<RoundKeys> {
    let bytes = decode_hex(hex_str, "key")?;
    let round_keys = expand_key(&bytes).context("expand key")?;
    debug!("using {} key", round_keys.key_size());
    Ok(round_keys)
}

fn parse_key_bits(s: &str) -> Result<KeySize> {
    let bits: usize = s.parse().context("key size must be a number of bits")?;
    ensure!(bits % 8 == 0, "key size must be a whole number of bytes");
    KeySize::from_len(bits / 8).context("key size must be 128, 192 or 256")
}

fn random_round_keys(rng: &mut impl RngCore, size: KeySize) -> Result<RoundKeys> {
    let mut key = vec![0u8; size.key_len()];
    rng.fill_bytes(&mut key);
    Ok(expand_key(&key)?)
}

fn random_block(rng: &mut impl RngCore) -> Block {
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);
    block
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
