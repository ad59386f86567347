//! Signatures as they show up in the wild
//!
//! Each case is a signature scraped from a real library (numpy, pandas, torch,
//! the array API) together with the argument list it should produce.

use pysig::signature::{parse, parse_signature, Argument, ParameterKind};
use rstest::rstest;

fn arg(name: &str) -> Argument {
    Argument::new(name)
}

#[rstest]
#[case::empty("()", vec![])]
#[case::return_annotation_only("() -> int", vec![])]
#[case::annotations(
    "(a: int = 1, b: float)",
    vec![arg("a").with_type("int").with_default("1"), arg("b").with_type("float")]
)]
#[case::arange(
    "([start,] stop[, step,], dtype=None, *, device=None, like=None)",
    vec![
        arg("start").optional(),
        arg("stop"),
        arg("step").optional(),
        arg("dtype").with_default("None"),
        arg("*"),
        arg("device").with_default("None"),
        arg("like").with_default("None"),
    ]
)]
#[case::generic_reduction(
    "(op1=func1, op2=func2, ...)",
    vec![arg("op1").with_default("func1"), arg("op2").with_default("func2"), arg("**kwargs")]
)]
#[case::catch_alls("(*args, **kwargs)", vec![arg("*args"), arg("**kwargs")])]
#[case::pandas_suffixes(
    "(a: 'Suffixes' = ('_x', '_y'))",
    vec![arg("a").with_type("'Suffixes'").with_default("('_x', '_y')")]
)]
#[case::torch_rot90(
    "(input, k=1, dims=[0,1]) -> Tensor",
    vec![arg("input"), arg("k").with_default("1"), arg("dims").with_default("[0,1]")]
)]
#[case::concatenate(
    "( (a1, a2, ...), axis=0, out=None, dtype=None, casting=\"same_kind\" )",
    vec![
        arg("(a1, a2, ...)"),
        arg("axis").with_default("0"),
        arg("out").with_default("None"),
        arg("dtype").with_default("None"),
        arg("casting").with_default("\"same_kind\""),
    ]
)]
#[case::pandas_timedelta_range(
    "(start=None, *, unit: 'str | None' = None) -> 'TimedeltaIndex'",
    vec![
        arg("start").with_default("None"),
        arg("*"),
        arg("unit").with_type("'str | None'").with_default("None"),
    ]
)]
#[case::repr_default(
    "(a = <1>, b = 2.0)",
    vec![arg("a").with_default("<1>"), arg("b").with_default("2.0")]
)]
fn test_real_world_signature(#[case] text: &str, #[case] expected: Vec<Argument>) {
    assert_eq!(parse(text), expected);
}

#[test]
fn test_modf_optional_outputs_and_markers() {
    let signature = parse_signature(
        "(x[, out1, out2], / [, out=(None, None)], *, where=True, casting='same_kind', \
         order='K', dtype=None, subok=True[, signature, extobj])",
    );
    let optional: Vec<&str> = signature
        .iter()
        .filter(|arg| arg.optional)
        .map(|arg| arg.name.as_str())
        .collect();
    assert_eq!(optional, vec!["out1", "out2", "out", "signature", "extobj"]);
    assert!(!signature.variadic);

    let shape = signature.call_shape();
    let positional: Vec<&str> = shape.positional.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(positional, vec!["x", "out1", "out2", "out"]);
}

#[test]
fn test_linspace_parameter_kinds() {
    let signature = parse_signature(
        "(start: 'Union[int, float]', stop: 'Union[int, float]', /, num: 'int', *, \
         dtype: 'Optional[Dtype]' = None, device: 'Optional[Device]' = None, \
         endpoint: 'bool' = True) -> 'Array'",
    );
    let kinds: Vec<ParameterKind> = signature
        .parameters()
        .iter()
        .map(|parameter| parameter.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ParameterKind::PositionalOnly,
            ParameterKind::PositionalOnly,
            ParameterKind::PositionalOrKeyword,
            ParameterKind::KeywordOnly,
            ParameterKind::KeywordOnly,
            ParameterKind::KeywordOnly,
        ]
    );
}

#[test]
fn test_parse_results_are_independent() {
    let first = parse("(a, b)");
    let second = parse("(c)");
    assert_eq!(first, vec![arg("a"), arg("b")]);
    assert_eq!(second, vec![arg("c")]);
}

#[test]
fn test_parsing_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("(x{i}, /, *, where=True)");
                parse(&text)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let parsed = handle.join().expect("parser thread");
        assert_eq!(parsed[0].name, format!("x{i}"));
        assert_eq!(parsed.len(), 4);
    }
}
