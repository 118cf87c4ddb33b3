use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("qinfo version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
