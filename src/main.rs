fn main() -> anyhow::Result<()> {
    let report = testcard::generate()?;
    println!("Created test image: {} bytes", report.size_bytes);
    Ok(())
}
