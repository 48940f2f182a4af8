use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use num_bigint::BigUint;
use serde::Serialize;

use crate::crypto::ProviderRegistry;

#[derive(Parser, Debug)]
#[command(name = "credential-digest", version, about = "Derive a SHA-256 integer identifier from text")]
pub struct Cli {
    /// Text to hash. Standard input is read verbatim when omitted.
    pub text: Option<String>,

    #[arg(short, long, default_value = "SHA-256")]
    pub algorithm: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Decimal)]
    pub format: OutputFormat,

    /// Drop one trailing newline from standard input.
    #[arg(long)]
    pub strip_newline: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Decimal,
    Hex,
    Json,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DigestRecord {
    pub algorithm: String,
    pub hex: String,
    pub decimal: String,
    pub input_bytes: usize,
}

impl DigestRecord {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Decimal => self.decimal.clone(),
            OutputFormat::Hex => self.hex.clone(),
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }
}

pub fn run(cli: &Cli, registry: &ProviderRegistry, mut stdin: impl Read) -> Result<String> {
    let text = match &cli.text {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read text from standard input")?;
            if cli.strip_newline {
                strip_newline(&mut buf);
            }
            buf
        }
    };

    let engine = registry.engine(&cli.algorithm)?;
    let digest = engine.digest_bytes(&text)?;
    let value = BigUint::from_bytes_be(&digest);
    let record = DigestRecord {
        algorithm: engine.provider().algorithm().to_string(),
        hex: hex::encode(digest),
        decimal: value.to_string(),
        input_bytes: text.len(),
    };
    record.render(cli.format)
}

fn strip_newline(buf: &mut String) {
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("credential-digest").chain(args.iter().copied()))
    }

    #[test]
    fn test_decimal_default() {
        let cli = parse(&["abc"]);
        let out = run(&cli, &ProviderRegistry::with_defaults(), std::io::empty()).unwrap();
        assert_eq!(
            out,
            "84342368487090800366523834928142263660104883695016514377462985829716817089965"
        );
    }

    #[test]
    fn test_hex_from_stdin() {
        let cli = parse(&["--format", "hex", "--strip-newline"]);
        let out = run(&cli, &ProviderRegistry::with_defaults(), "abc\r\n".as_bytes()).unwrap();
        assert_eq!(out, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
    }

    #[test]
    fn test_stdin_verbatim() {
        let cli = parse(&["-f", "hex"]);
        let out = run(&cli, &ProviderRegistry::with_defaults(), "abc\n".as_bytes()).unwrap();
        assert_eq!(out, crate::crypto::sha256_hex("abc\n").unwrap());
    }

    #[test]
    fn test_json_record() {
        let cli = parse(&["--format", "json", ""]);
        let out = run(&cli, &ProviderRegistry::with_defaults(), std::io::empty()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["algorithm"], "SHA-256");
        assert_eq!(
            parsed["hex"],
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(parsed["input_bytes"], 0);
    }

    #[test]
    fn test_json_record_uses_provider_name() {
        let cli = parse(&["--algorithm", " sha-256", "--format", "json", "abc"]);
        let out = run(&cli, &ProviderRegistry::with_defaults(), std::io::empty()).unwrap();
        let record: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(record["algorithm"], "SHA-256");
        assert_eq!(
            record["hex"],
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            record["decimal"],
            "84342368487090800366523834928142263660104883695016514377462985829716817089965"
        );
        assert_eq!(record["input_bytes"], 3);
    }

    #[test]
    fn test_unknown_algorithm() {
        let cli = parse(&["--algorithm", "MD5", "abc"]);
        let err = run(&cli, &ProviderRegistry::with_defaults(), std::io::empty()).unwrap_err();
        assert_eq!(err.to_string(), "digest algorithm unavailable: MD5");
    }
}
