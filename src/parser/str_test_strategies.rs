use proptest::prelude::*;


pub(crate) fn simple_number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..=1000).prop_map(|n| n.to_string()),
        (0u32..=100, 1u32..=99).prop_map(|(whole, frac)| format!("{whole}.{frac}")),
    ]
}

pub(crate) fn operator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"), Just("-"), Just("*"), Just("/"), Just("%")]
}

/// Modifier text as typed after a dice spec: `+3`, `* 2`, `-1 + 4`, or nothing.
pub(crate) fn modifier_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((operator_strategy(), 1u32..=20, prop::bool::ANY), 0..4)
        .prop_map(|terms| {
            terms.into_iter()
                .map(|(op, n, spaced)| if spaced { format!("{op} {n}") } else { format!("{op}{n}") })
                .collect::<Vec<_>>()
                .join(" ")
        })
}

pub(crate) fn parenthesized_strategy(inner: impl Strategy<Value = String>) -> impl Strategy<Value = String> {
    inner.prop_map(|expr| format!("({})", expr))
}

pub(crate) fn binary_operation_strategy(
    left: impl Strategy<Value = String>,
    right: impl Strategy<Value = String>
) -> impl Strategy<Value = String> {
    (left, operator_strategy(), right)
        .prop_map(|(l, op, r)| format!("{} {} {}", l, op, r))
}

pub(crate) fn roll_expression_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        simple_number_strategy(),
        (1u32..=1000, modifier_strategy()).prop_map(|(total, modifier)| format!("{total} {modifier}")),
    ];

    leaf.prop_recursive(4, 32, 10, |inner| {
        prop_oneof![
            parenthesized_strategy(inner.clone()),
            binary_operation_strategy(inner.clone(), inner),
        ]
    })
}
