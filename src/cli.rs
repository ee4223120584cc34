use clap::{Parser, Subcommand};

use textcodec::web::{BIND_ENV, DEFAULT_BIND};

#[derive(Parser)]
#[command(name = "textcodec")]
#[command(about = "Encode and decode text: utf8, url, hex, rot13, binary, octal, punycode, morse, braille, base64")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Encode text")]
    Enc {
        #[arg(long, short = 'e', default_value = "base64")]
        encoding: String,

        #[arg(long, short = 'i', default_value = "-", help = "Input: '-' for stdin, @file, or literal text")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Show the text under every encoding")]
        all: bool,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Decode text")]
    Dec {
        #[arg(long, short = 'e', default_value = "base64")]
        encoding: String,

        #[arg(long, short = 'i', default_value = "-", help = "Input: '-' for stdin, @file, or literal text")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Decode from one encoding and re-encode in another")]
    Conv {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "List supported encodings")]
    List {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Show encoding details")]
    Info {
        encoding: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Serve the web form")]
    Serve {
        #[arg(long, env = BIND_ENV, default_value = DEFAULT_BIND)]
        bind: String,
    },
}
