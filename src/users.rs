pub async fn user_slugs(path: &str) -> Result<Vec<String>, String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|_| format!("failed to read {path}"))?;
    Ok(parse_user_slugs(&text))
}

fn parse_user_slugs(text: &str) -> Vec<String> {
    text.lines()
        .map(|it| it.trim())
        .filter(|it| !it.is_empty())
        .map(|it| it.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_dropped() {
        assert_eq!(vec!["alice", "bob"], parse_user_slugs("alice\n\nbob\n"));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(
            vec!["alice", "bob"],
            parse_user_slugs("  alice \r\n\tbob\r\n   \n")
        );
    }

    #[test]
    fn test_order_preserved() {
        assert_eq!(
            vec!["carol", "alice", "bob", "alice"],
            parse_user_slugs("carol\nalice\nbob\nalice\n")
        );
    }

    #[tokio::test]
    async fn test_missing_file() {
        assert!(user_slugs(".does_not_exist.txt").await.is_err());
    }

    #[tokio::test]
    async fn test_users_file() {
        let path = std::env::temp_dir().join(".users_test.txt");
        tokio::fs::write(&path, "alice\n\nbob\n")
            .await
            .expect("failed to write test file");
        let slugs = user_slugs(path.to_str().unwrap())
            .await
            .expect("failed to read test file");
        assert_eq!(vec!["alice", "bob"], slugs);
        let _ = tokio::fs::remove_file(&path).await;
    }
}
