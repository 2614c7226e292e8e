use anyhow::bail;
use argtype_common::config::Config;
use argtype_core::{Kind, Value};
use tracing::error;

use crate::terminal::{format, print};

pub fn check(kind: Kind, values: &[String], cfg: &Config) -> anyhow::Result<()> {
    print::header(&format!("checking {kind}"));

    let mut failed: usize = 0;
    for (idx, raw) in values.iter().enumerate() {
        match kind.check(&Value::from(raw), cfg) {
            Ok(converted) => {
                print::tree_head(idx, raw);
                let rows = format::converted_to_key_value_pairs(&converted);
                if rows.is_empty() {
                    print::print_status("nothing left after filtering");
                }
                print::as_tree_one_level(rows);
            }
            Err(e) => {
                error!("{e}");
                failed += 1;
            }
        }
    }

    print::end_of_program();
    if failed > 0 {
        bail!("{failed} of {} value(s) rejected as {kind}", values.len());
    }
    Ok(())
}
