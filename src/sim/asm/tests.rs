use super::*;
use super::errors::AsmErrorKind;
use super::program::DataItem;
use crate::sim::memory::Width;

#[test]
fn labels_point_at_the_next_instruction() {
    let asm = "main: addi x1, x0, 5\nloop:\n  add x2, x2, x1\n  beq x0, x0, loop";
    let prog = assemble(asm).expect("assemble");
    assert_eq!(prog.lines, ["addi x1, x0, 5", "add x2, x2, x1", "beq x0, x0, loop"]);
    assert_eq!(prog.labels["main"], 0);
    assert_eq!(prog.labels["loop"], 1);
}

#[test]
fn label_at_end_points_past_the_program() {
    let prog = assemble("addi x1, x0, 1\nend:").expect("assemble");
    assert_eq!(prog.labels["end"], 1);
    assert_eq!(prog.len(), 1);
}

#[test]
fn comments_are_stripped() {
    let prog = assemble("; header\naddi x1, x0, 1 # one\nadd x2, x1, x1 ; two").expect("assemble");
    assert_eq!(prog.lines, ["addi x1, x0, 1", "add x2, x1, x1"]);
}

#[test]
fn duplicate_label_fails_the_load() {
    let err = assemble("foo: addi x1, x0, 1\nfoo: addi x1, x0, 2").err().expect("expected error");
    assert_eq!(err.line, 1);
    assert_eq!(
        err.kind,
        AsmErrorKind::DuplicateLabel { label: "foo".into(), first: 0 }
    );
    assert_eq!(err.to_string(), "line 2: label foo already exists at line 1");
}

#[test]
fn data_section_collects_items_in_order() {
    let asm = ".data\n.dword 1, -1\n.word 0x12345678 7\n.byte 255\n.half -2\n.text\nld x1, 0(x2)";
    let prog = assemble(asm).expect("assemble");
    assert_eq!(
        prog.data,
        [
            DataItem { width: Width::Double, value: 1 },
            DataItem { width: Width::Double, value: u64::MAX },
            DataItem { width: Width::Word, value: 0x1234_5678 },
            DataItem { width: Width::Word, value: 7 },
            DataItem { width: Width::Byte, value: 0xFF },
            DataItem { width: Width::Half, value: 0xFFFE },
        ]
    );
    assert_eq!(prog.data_bytes(), 8 + 8 + 4 + 4 + 1 + 2);
    assert_eq!(prog.lines, ["ld x1, 0(x2)"]);
}

#[test]
fn data_values_may_follow_on_the_next_line() {
    let prog = assemble(".data\n.word\n1, 2\n.text\nadd x1, x1, x1").expect("assemble");
    assert_eq!(prog.data.len(), 2);
    assert!(prog.data.iter().all(|d| d.width == Width::Word));
}

#[test]
fn hex_data_is_truncated_to_width() {
    let prog = assemble(".data\n.byte 0x1234").expect("assemble");
    assert_eq!(prog.data[0].value, 0x34);
}

#[test]
fn out_of_range_decimal_data_errors() {
    let err = assemble(".data\n.byte 256").err().expect("expected error");
    assert!(matches!(err.kind, AsmErrorKind::InvalidData(_)));
    let err = assemble(".data\n.half abc").err().expect("expected error");
    assert!(matches!(err.kind, AsmErrorKind::InvalidData(_)));
}

#[test]
fn unknown_data_directive_errors() {
    let err = assemble(".data\n.asciz \"hi\"").err().expect("expected error");
    assert!(matches!(err.kind, AsmErrorKind::UnknownDirective(_)));
}

#[test]
fn dangling_directive_errors() {
    let err = assemble(".data\n.word").err().expect("expected error");
    assert_eq!(err.line, 1);
    assert!(err.to_string().contains(".word"));
}

#[test]
fn line_offset_counts_lines_before_first_instruction() {
    let asm = ".data\n.word 1\n\n.text\nmain:\n  addi x1, x0, 1\n  addi x2, x0, 2";
    let prog = assemble(asm).expect("assemble");
    assert_eq!(prog.line_offset, 5);
    assert_eq!(prog.index_of_line(6), Some(0));
    assert_eq!(prog.index_of_line(7), Some(1));
    assert_eq!(prog.index_of_line(5), None);
    assert_eq!(prog.index_of_line(8), None);
    assert_eq!(prog.line_of_index(1), 7);
}

#[test]
fn source_lines_follow_labels_inside_text() {
    let asm = "main:\n  addi x1, x0, 1\nfoo:\n  addi x2, x0, 2\n; note\n\n  addi x3, x0, 3";
    let prog = assemble(asm).expect("assemble");
    assert_eq!(prog.line_offset, 1);
    assert_eq!(prog.source_lines, [2, 4, 7]);
    assert_eq!(prog.index_of_line(4), Some(1));
    assert_eq!(prog.index_of_line(3), None);
    assert_eq!(prog.index_of_line(7), Some(2));
    assert_eq!(prog.line_of_index(2), 7);
    assert_eq!(prog.line_of_index(3), 8);
    assert_eq!(prog.frame_line(0), 1);
    assert_eq!(prog.frame_line(2), 4);
}

#[test]
fn malformed_instructions_still_load() {
    let prog = assemble("addx1 x2\nfoo bar").expect("assemble");
    assert_eq!(prog.len(), 2);
}
