pub(crate) mod cards;

pub(crate) const GRAPHQL_ENDPOINT: &str = "https://api.sorare.com/graphql";
