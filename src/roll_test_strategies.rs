use proptest::prelude::*;
use crate::roll::{FaceBound, Roll};


pub(crate) fn face_bound_strategy() -> impl Strategy<Value = FaceBound> {
    prop_oneof![Just(FaceBound::Inclusive), Just(FaceBound::Exclusive)]
}

pub(crate) fn roll_strategy() -> impl Strategy<Value = Roll> {
    (1..=100u32, 1..=100u32)
        .prop_map(|(sides, count)| Roll::builder(sides).count(count).build().unwrap())
}

/// A well formed directive body `NdM<modifier> <label>` plus the pieces it was built from.
pub(crate) fn directive_strategy() -> impl Strategy<Value = (String, u32, u32, String, String)> {
    (
        1..=9u32,
        1..=100u32,
        prop::collection::vec((prop_oneof![Just("+"), Just("-"), Just("*"), Just("/"), Just("%")], 1u32..=20), 0..3),
        "[a-zA-Z][a-zA-Z ]{0,12}[a-zA-Z]",
    ).prop_map(|(count, sides, terms, label)| {
        let modifier = terms.into_iter()
            .map(|(op, n)| format!("{op}{n}"))
            .collect::<Vec<_>>()
            .join(" ");

        let text = format!("[{count}d{sides}{modifier} {label}]");
        (text, count, sides, modifier, label)
    })
}
