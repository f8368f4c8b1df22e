/// Use cases module containing application business logic orchestration
mod get_interactions;
mod get_network;
mod string_dataset;

pub use get_interactions::{GetInteractionsUseCase, BIOGRID_BASE_URL};
pub use get_network::{
    make_sublists, GetNetworkUseCase, MAX_IDENTIFIERS_PER_REQUEST, STRING_API_BASE_URL,
};
pub use string_dataset::{
    StringDataset, StringEndpoints, StringFileKind, DEFAULT_MIN_SCORE, MAX_COMBINED_SCORE,
};
