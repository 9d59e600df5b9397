use std::io::Write;

use opaque_facade::{Facade, FacadeId};
use serde::Serialize;

use crate::error::DemoResult;

/// What the demo can say about a facade without looking inside it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub facade_id: FacadeId,
    pub init: i32,
    pub actions: u64,
}

impl RunSummary {
    pub fn of(facade: &Facade, actions: u64) -> Self {
        Self {
            facade_id: facade.id(),
            init: facade.init_value(),
            actions,
        }
    }
}

/// One line per summary, either prose or compact JSON.
pub fn write_summary<W: Write>(out: &mut W, summary: &RunSummary, json: bool) -> DemoResult<()> {
    if json {
        serde_json::to_writer(&mut *out, summary)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "facade {}: seeded with {}, {} action(s) performed",
            summary.facade_id, summary.init, summary.actions
        )?;
    }
    Ok(())
}
