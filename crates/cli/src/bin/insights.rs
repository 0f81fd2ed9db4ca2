use anyhow::Result;

fn main() -> Result<()> {
    insights_cli::main_entry()
}
