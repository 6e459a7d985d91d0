use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::open_store;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportTarget};
use crate::utils::date;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        dir,
        force,
    } = cmd
    {
        let target = match (file, dir) {
            (Some(f), _) => ExportTarget::File(expand_tilde(f)),
            (None, Some(d)) => ExportTarget::Dir(expand_tilde(d)),
            (None, None) => ExportTarget::Dir(cfg.export_dir()),
        };

        let store = open_store(&cfg.database)?;
        let path = ExportLogic::export(store.records(), *format, &target, date::today(), *force)?;

        ttlog_quiet(
            store.repository().conn(),
            "export",
            &path.to_string_lossy(),
            &format!(
                "{} record(s) exported as {}",
                store.records().len(),
                format.as_str()
            ),
        );
    }
    Ok(())
}
