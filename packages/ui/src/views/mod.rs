mod select_party_placeholder;
pub use select_party_placeholder::SelectPartyPlaceholder;

mod party_planner;
pub use party_planner::PartyPlannerView;
