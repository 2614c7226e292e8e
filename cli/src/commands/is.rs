use anyhow::bail;
use argtype_common::config::Config;
use argtype_core::{Kind, Value};
use colored::*;

use crate::terminal::colors;
use crate::terminal::print::{self, GLOBAL_KEY_WIDTH};

pub fn is(kind: Kind, values: &[String], cfg: &Config) -> anyhow::Result<()> {
    print::header(&format!("is it {kind}?"));
    GLOBAL_KEY_WIDTH.set(values.iter().map(|v| v.chars().count()).max().unwrap_or(0));

    let mut rejected: usize = 0;
    for raw in values {
        let verdict = if kind.matches(&Value::from(raw), cfg) {
            "true".color(colors::VALID).bold()
        } else {
            rejected += 1;
            "false".color(colors::INVALID).bold()
        };
        print::aligned_line(raw, verdict);
    }

    print::end_of_program();
    if rejected > 0 {
        bail!("{rejected} of {} value(s) are not {kind}", values.len());
    }
    Ok(())
}
