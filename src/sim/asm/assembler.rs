use std::collections::HashMap;

use tracing::warn;

use crate::sim::memory::Width;

use super::errors::{AsmError, AsmErrorKind};
use super::program::{DataItem, Program};
use super::utils::*;

enum Section {
    Text,
    Data,
}

// ---------- API ----------
/// Splits source text into instruction lines, labels and data items.
///
/// Instructions are not decoded here: a malformed instruction still loads and
/// reports its fault when it is executed.
pub fn assemble(text: &str) -> Result<Program, AsmError> {
    let mut section = Section::Text;
    let mut prog = Program::default();
    // label -> source line of its definition, for duplicate reports
    let mut defined_at = HashMap::<String, usize>::new();
    // a data directive whose values continue on the next line
    let mut pending: Option<(Width, usize)> = None;
    let mut first_instr: Option<usize> = None;

    for (line_no, raw) in preprocess(text) {
        if raw == ".text" {
            section = Section::Text;
            continue;
        }
        if raw == ".data" {
            section = Section::Data;
            continue;
        }

        match section {
            Section::Data => {
                let mut line = raw.as_str();
                if let Some((lab, rest)) = split_label(line) {
                    warn!(line = line_no + 1, label = lab, "labels in .data are not addressable");
                    line = rest;
                    if line.is_empty() {
                        continue;
                    }
                }
                let (width, values) = match pending.take() {
                    Some((width, _)) => (width, line),
                    None => data_directive(line).ok_or_else(|| AsmError {
                        line: line_no,
                        kind: AsmErrorKind::UnknownDirective(line.to_string()),
                    })?,
                };
                let values = split_values(values);
                if values.is_empty() {
                    pending = Some((width, line_no));
                    continue;
                }
                for tok in values {
                    let value = parse_data_value(tok, width).map_err(|msg| AsmError {
                        line: line_no,
                        kind: AsmErrorKind::InvalidData(msg),
                    })?;
                    prog.data.push(DataItem { width, value });
                }
            }
            Section::Text => {
                let mut line = raw.as_str();
                while let Some((lab, rest)) = split_label(line) {
                    if let Some(&first) = defined_at.get(lab) {
                        return Err(AsmError {
                            line: line_no,
                            kind: AsmErrorKind::DuplicateLabel { label: lab.to_string(), first },
                        });
                    }
                    defined_at.insert(lab.to_string(), line_no);
                    prog.labels.insert(lab.to_string(), prog.lines.len());
                    line = rest;
                }
                if line.is_empty() {
                    // label only
                    continue;
                }
                first_instr.get_or_insert(line_no);
                prog.lines.push(line.to_string());
                prog.source_lines.push(line_no + 1);
            }
        }
    }

    if let Some((width, line)) = pending {
        return Err(AsmError {
            line,
            kind: AsmErrorKind::InvalidData(format!("no values for .{}", directive_name(width))),
        });
    }

    prog.line_offset = first_instr.unwrap_or(0);
    Ok(prog)
}

fn directive_name(width: Width) -> &'static str {
    match width {
        Width::Byte => "byte",
        Width::Half => "half",
        Width::Word => "word",
        Width::Double => "dword",
    }
}
