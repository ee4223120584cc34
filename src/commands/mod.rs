mod conv;
mod dec;
mod enc;
mod info;
mod list;
mod serve;

pub use conv::run_conv;
pub use dec::{run_decode, run_decode_json};
pub use enc::{format_encode_all, run_encode, run_encode_all};
pub use info::run_info;
pub use list::run_list;
pub use serve::run_serve;

use crate::io::write_output;
use textcodec::error::Result;
use textcodec::types::{Context, InputSource, OutputDest};
use textcodec::web::ServerConfig;

pub trait CommandHandler {
    fn execute(&self, ctx: &Context) -> Result<()>;
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub struct EncCommand {
    pub encoding: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub all: bool,
    pub json: bool,
}

impl CommandHandler for EncCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        if self.all {
            let results = run_encode_all(ctx, &self.input)?;
            let rendered = if self.json {
                to_json(&results)?
            } else {
                format_encode_all(&results)
            };
            return write_output(&rendered, &self.output);
        }

        let result = run_encode(ctx, &self.encoding, &self.input)?;
        if self.json {
            write_output(&to_json(&result)?, &self.output)
        } else {
            write_output(&result.output, &self.output)
        }
    }
}

pub struct DecCommand {
    pub encoding: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub json: bool,
}

impl CommandHandler for DecCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        if self.json {
            let result = run_decode_json(ctx, &self.encoding, &self.input)?;
            return write_output(&to_json(&result)?, &self.output);
        }

        let decoded = run_decode(ctx, &self.encoding, &self.input)?;
        write_output(&decoded, &self.output)
    }
}

pub struct ConvCommand {
    pub from: String,
    pub to: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub json: bool,
}

impl CommandHandler for ConvCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let result = run_conv(ctx, &self.from, &self.to, &self.input)?;
        if self.json {
            write_output(&to_json(&result)?, &self.output)
        } else {
            write_output(&result.output, &self.output)
        }
    }
}

pub struct ListCommand {
    pub json: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let encodings = run_list(ctx);
        if self.json {
            println!("{}", to_json(&encodings)?);
        } else {
            println!("{:<10} {:<9} DESCRIPTION", "NAME", "DECODE");
            println!("{}", "-".repeat(60));
            for m in encodings {
                let decode = if m.fallible { "checked" } else { "lenient" };
                println!("{:<10} {:<9} {}", m.name, decode, m.description);
            }
        }
        Ok(())
    }
}

pub struct InfoCommand {
    pub encoding: String,
    pub json: bool,
}

impl CommandHandler for InfoCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let meta = run_info(ctx, &self.encoding)?;
        if self.json {
            println!("{}", to_json(&meta)?);
        } else {
            println!("Name:        {}", meta.name);
            println!("Alphabet:    {}", meta.alphabet);
            println!("Case:        {:?}", meta.case_sensitivity);
            println!("Can fail:    {}", if meta.fallible { "yes" } else { "no" });
            println!("Description: {}", meta.description);
        }
        Ok(())
    }
}

pub struct ServeCommand {
    pub config: ServerConfig,
}

impl CommandHandler for ServeCommand {
    fn execute(&self, _ctx: &Context) -> Result<()> {
        run_serve(self.config.clone())
    }
}
