//! Property tests for action id parsing.

use proptest::prelude::*;

use opener::{parse_action_list, ActionId};

fn action_id() -> impl Strategy<Value = ActionId> {
    prop_oneof![
        Just(ActionId::CatchAll),
        (1u32..=u32::MAX).prop_map(ActionId::Ordinary),
        (1u32..=u32::MAX).prop_map(ActionId::Group),
    ]
}

proptest! {
    /// PROPERTY: printed opener lists parse back to the same slots.
    #[test]
    fn property_printed_list_parses_back(
        ids in proptest::collection::vec(action_id(), 0..16),
        comma in any::<bool>(),
    ) {
        let sep = if comma { "," } else { " " };
        let text = ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(sep);

        prop_assert_eq!(parse_action_list(&text).unwrap(), ids);
    }

    /// PROPERTY: arbitrary input never panics the parser.
    #[test]
    fn property_parse_never_panics(input in ".{0,64}") {
        let _ = parse_action_list(&input);
        let _ = input.parse::<ActionId>();
    }

    /// PROPERTY: the signed form and the tagged form agree.
    #[test]
    fn property_raw_round_trips(id in action_id()) {
        prop_assert_eq!(ActionId::try_from(id.raw()).unwrap(), id);
    }
}
