use crate::report::Report;
use crate::sorare::{self, Card};
use crate::users::user_slugs;
use tracing::{info, warn};

const USERS_FILE: &str = "users.txt";
const OUTPUT_FILE: &str = "UserCards.xlsx";

pub async fn run() -> Result<(), String> {
    let slugs = user_slugs(USERS_FILE).await?;
    info!("users: {}", slugs.len());
    sorare::update_bearer_token().await?;
    let report = collect_cards(&slugs, async |slug: &str| sorare::user_cards(slug).await).await;
    info!("rows: {}", report.len());
    report.save(OUTPUT_FILE)?;
    info!("saved {OUTPUT_FILE}");
    Ok(())
}

/// Fetches the cards of each user in turn. A failed lookup only skips
/// that user; the remaining users are still processed.
async fn collect_cards<F>(slugs: &[String], fetch: F) -> Report
where
    F: AsyncFn(&str) -> Option<Vec<Card>>,
{
    let mut report = Report::new();
    for slug in slugs {
        info!("processing user: {slug}");
        match fetch(slug.as_str()).await {
            Some(cards) => {
                info!("cards: {}", cards.len());
                report.add_cards(slug.as_str(), cards);
            }
            None => warn!("failed to get cards for {slug}"),
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(asset_id: &str, slug: &str) -> Card {
        Card {
            asset_id: asset_id.to_string(),
            slug: slug.to_string(),
            name: Some("Card".to_string()),
            position: Some("Forward".to_string()),
            price_eur: None,
            on_sale: true,
        }
    }

    #[tokio::test]
    async fn test_failed_user_skipped() {
        let slugs = vec!["alice".to_string(), "bob".to_string()];
        let report = collect_cards(&slugs, async |slug: &str| match slug {
            "alice" => Some(vec![card("0x01", "card-1"), card("0x02", "card-2")]),
            _ => None,
        })
        .await;
        assert_eq!(2, report.len());
        for row in report.rows() {
            assert_eq!("alice", row.user_slug);
        }
    }

    #[tokio::test]
    async fn test_processing_continues_after_failure() {
        let slugs = vec![
            "alice".to_string(),
            "bob".to_string(),
            "carol".to_string(),
        ];
        let report = collect_cards(&slugs, async |slug: &str| match slug {
            "alice" => Some(vec![card("0x01", "card-1")]),
            "carol" => Some(vec![card("0x03", "card-3")]),
            _ => None,
        })
        .await;
        assert_eq!(2, report.len());
        assert_eq!("alice", report.rows()[0].user_slug);
        assert_eq!("carol", report.rows()[1].user_slug);
    }

    #[tokio::test]
    async fn test_round_trip_pairs() {
        let slugs = vec!["alice".to_string(), "bob".to_string()];
        let report = collect_cards(&slugs, async |slug: &str| match slug {
            "alice" => Some(vec![card("0x01", "card-1"), card("0x02", "card-2")]),
            "bob" => Some(vec![card("0x03", "card-3")]),
            _ => None,
        })
        .await;
        let pairs = report
            .rows()
            .iter()
            .map(|it| (it.user_slug.as_str(), it.card.slug.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            vec![("alice", "card-1"), ("alice", "card-2"), ("bob", "card-3")],
            pairs
        );
    }

    #[tokio::test]
    async fn test_no_users_no_rows() {
        let report = collect_cards(&[], async |_: &str| -> Option<Vec<Card>> { None }).await;
        assert!(report.is_empty());
    }
}
