use crate::http_client::json_client;
use crate::sorare::graphql::GRAPHQL_ENDPOINT;
use crate::sorare::{Card, SORARE_AUTHORIZATION};
use reqwest::Url;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde_json::json;
#[cfg(test)]
use tokio::io::AsyncWriteExt;

const PAGE_SIZE: u32 = 50;

/// Returns all the cards owned by the user with the given slug, following
/// the connection cursors until the last page.
pub async fn user_cards(slug: &str) -> Option<Vec<Card>> {
    let url = Url::parse(GRAPHQL_ENDPOINT).unwrap();
    let client = json_client();
    collect_pages(async |after: Option<String>| {
        let request = client
            .post(url.as_str())
            .header(
                AUTHORIZATION,
                SORARE_AUTHORIZATION
                    .get_ref()
                    .map(|it| it.bearer_token.clone())?,
            )
            .json(&json!({
                "operationName": "getUserCards",
                "query": GRAPHQL_GET_USER_CARDS,
                "variables": {
                    "slug": slug,
                    "first": PAGE_SIZE,
                    "after": after,
                }
            }))
            .build()
            .ok()?;
        let response = client.execute(request).await.ok()?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("POST {} {status}", url.as_str());
            return None;
        }
        let text = response.text().await.ok()?;
        #[cfg(test)]
        {
            println!("cards");
            println!("POST {}", url.as_str());
            println!("{status}");
            tokio::fs::OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(".cards.json")
                .await
                .ok()?
                .write_all(text.as_bytes())
                .await
                .unwrap();
        }
        decode_cards_page(&text)
    })
    .await
}

struct CardsPage {
    nodes: Vec<Card>,
    has_next_page: bool,
    end_cursor: Option<String>,
}

async fn collect_pages<F>(fetch: F) -> Option<Vec<Card>>
where
    F: AsyncFn(Option<String>) -> Option<CardsPage>,
{
    let mut cards = Vec::new();
    let mut after = None;
    loop {
        let page = fetch(after.take()).await?;
        cards.extend(page.nodes);
        if !page.has_next_page {
            break;
        }
        match page.end_cursor {
            Some(it) => after = Some(it),
            None => break,
        }
    }
    Some(cards)
}

fn decode_cards_page(text: &str) -> Option<CardsPage> {
    #[derive(Deserialize)]
    struct PageInfo {
        #[serde(rename = "hasNextPage")]
        has_next_page: bool,
        #[serde(rename = "endCursor")]
        end_cursor: Option<String>,
    }
    #[derive(Deserialize)]
    struct CardsConnection {
        nodes: Vec<Card>,
        #[serde(rename = "pageInfo")]
        page_info: PageInfo,
    }
    #[derive(Deserialize)]
    struct UserCards {
        cards: CardsConnection,
    }
    #[derive(Deserialize)]
    struct UserData {
        user: UserCards,
    }
    #[derive(Deserialize)]
    struct GraphqlResponse {
        data: UserData,
    }
    let connection = serde_json::from_str::<GraphqlResponse>(text)
        .inspect_err(|err| tracing::warn!("{err:?}"))
        .ok()?
        .data
        .user
        .cards;
    Some(CardsPage {
        nodes: connection.nodes,
        has_next_page: connection.page_info.has_next_page,
        end_cursor: connection.page_info.end_cursor,
    })
}

const GRAPHQL_GET_USER_CARDS: &str = "\
    query getUserCards(
        $slug: String!
        $first: Int!
        $after: String
    ) {
        user(slug: $slug) {
            cards(first: $first, after: $after) {
                nodes {
                    assetId
                    slug
                    name
                    position
                    priceEUR
                    onSale
                }
                pageInfo {
                    hasNextPage
                    endCursor
                }
            }
        }
    }\
";
