use textcodec::error::Result;
use textcodec::web::{self, ServerConfig};

pub fn run_serve(config: ServerConfig) -> Result<()> {
    actix_web::rt::System::new().block_on(web::serve(config))?;
    Ok(())
}
