use rowan::TextRange;

use super::*;

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::DivideByZero,
            TextRange::new(0.into(), 5.into()),
        )
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    assert!(!diagnostics.has_warnings());
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics.warning_count(), 0);
}

#[test]
fn diagnostic_kind_fallback_messages() {
    assert_eq!(
        DiagnosticKind::DivideByZero.fallback_message(),
        "possible divide by zero"
    );
    assert_eq!(
        DiagnosticKind::Assignment.fallback_message(),
        "incompatible qualifiers in assignment"
    );
}

#[test]
fn diagnostic_kind_message_rendering() {
    // No custom message → fallback
    assert_eq!(
        DiagnosticKind::DivideByZero.message(None),
        "possible divide by zero"
    );
    // With custom message → template applied
    assert_eq!(
        DiagnosticKind::DivideByZero.message(Some("Top")),
        "possible divide by zero: divisor is `Top`"
    );
    assert_eq!(
        DiagnosticKind::Assignment.message(Some("`Top` is not a subtype of `NonZeroInt`")),
        "incompatible qualifiers in assignment: `Top` is not a subtype of `NonZeroInt`"
    );
}

#[test]
fn diagnostic_kind_default_severity() {
    assert_eq!(
        DiagnosticKind::DivideByZero.default_severity(),
        Severity::Error
    );
    assert_eq!(
        DiagnosticKind::Assignment.default_severity(),
        Severity::Error
    );
}

#[test]
fn printer_single_diagnostic() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::DivideByZero,
            TextRange::new(4.into(), 5.into()),
        )
        .message("Top")
        .emit();

    let result = diagnostics.printer().source("x / y").render();
    insta::assert_snapshot!(result, @r"
    error: possible divide by zero: divisor is `Top`
      |
    1 | x / y
      |     ^
    ");
}

#[test]
fn printer_multiple_diagnostics() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::DivideByZero,
            TextRange::new(0.into(), 5.into()),
        )
        .emit();
    diagnostics
        .report(
            DiagnosticKind::Assignment,
            TextRange::new(4.into(), 5.into()),
        )
        .emit();

    let result = diagnostics.printer().source("x /= y").render();
    insta::assert_snapshot!(result, @r"
    error: possible divide by zero
      |
    1 | x /= y
      | ^^^^^

    error: incompatible qualifiers in assignment
      |
    1 | x /= y
      |     ^
    ");
}

#[test]
fn printer_with_path() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::Assignment,
            TextRange::new(0.into(), 5.into()),
        )
        .emit();

    let result = diagnostics
        .printer()
        .source("c = x")
        .path("subtyping.dz")
        .render();
    insta::assert_snapshot!(result, @r"
    error: incompatible qualifiers in assignment
     --> subtyping.dz:1:1
      |
    1 | c = x
      | ^^^^^
    ");
}

#[test]
fn printer_zero_width_span() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DivideByZero, TextRange::empty(0.into()))
        .emit();

    let result = diagnostics.printer().source("x / y").render();
    insta::assert_snapshot!(result, @r"
    error: possible divide by zero
      |
    1 | x / y
      | ^
    ");
}

#[test]
fn printer_related_annotation() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::Assignment,
            TextRange::new(0.into(), 1.into()),
        )
        .related_to("declared `Bottom` here", TextRange::new(4.into(), 5.into()))
        .emit();

    let result = diagnostics.printer().source("c = x").render();
    assert!(result.contains("incompatible qualifiers in assignment"));
    assert!(result.contains("declared `Bottom` here"));
}

#[test]
fn printer_colored() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::DivideByZero,
            TextRange::new(0.into(), 5.into()),
        )
        .emit();

    let result = diagnostics.printer().source("x / y").colored(true).render();
    assert!(result.contains("possible divide by zero"));
    assert!(result.contains('\x1b'));
}

#[test]
fn printer_empty_diagnostics() {
    let diagnostics = Diagnostics::new();
    let result = diagnostics.printer().source("x / y").render();
    assert!(result.is_empty());
}

#[test]
fn printer_plain_without_source() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::DivideByZero,
            TextRange::new(4.into(), 5.into()),
        )
        .emit();

    let result = diagnostics.printer().render();
    insta::assert_snapshot!(result, @"error at 4..5: possible divide by zero");
}

#[test]
fn diagnostics_extend() {
    let mut first = Diagnostics::new();
    first
        .report(DiagnosticKind::DivideByZero, TextRange::empty(0.into()))
        .emit();

    let mut second = Diagnostics::new();
    second
        .report(DiagnosticKind::Assignment, TextRange::empty(1.into()))
        .emit();

    first.extend(second);
    assert_eq!(first.len(), 2);
    let kinds: Vec<_> = first.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        vec![DiagnosticKind::DivideByZero, DiagnosticKind::Assignment]
    );
}
