//! Window Filter
//!
//! Keeps the SNPs that fall in per-chromosome sliding windows holding enough
//! highly significant variants.

mod cli;
mod snp_table;
mod window;

pub use cli::{handle_cli, Config};
pub use snp_table::{SnpKey, SnpRow, SnpTable, SNP_COLUMNS};
pub use window::WindowFilter;

pub fn process(cfg: &Config) -> anyhow::Result<()> {
    let table = SnpTable::from_path(cfg.input())?;
    info!(
        "{} SNPs on {} chromosomes read from {}",
        table.len(),
        table.n_chroms(),
        cfg.input().display()
    );

    let filter = WindowFilter::new(cfg.window_size(), cfg.min_depth(), cfg.log_pvalue());
    let rows = filter.apply(&table);
    if rows.is_empty() {
        warn!("No window passed the depth threshold; writing header only");
    }

    table.write_path(cfg.output(), rows.iter().copied())?;
    println!(
        "{} variations are saved to {}",
        rows.len(),
        cfg.output().display()
    );
    Ok(())
}
