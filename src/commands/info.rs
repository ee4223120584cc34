use textcodec::error::Result;
use textcodec::types::{CodecMeta, Context};

pub fn run_info(ctx: &Context, encoding_name: &str) -> Result<CodecMeta> {
    let codec = ctx.registry.get(encoding_name)?;
    Ok(codec.meta())
}
