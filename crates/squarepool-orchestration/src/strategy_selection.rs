//! Strategy selection logic.

use squarepool_core::SquareError;

use crate::interfaces::Strategy;

/// Get strategies to run based on a selection name.
pub fn get_strategies_to_run(selection: &str) -> Result<Vec<Strategy>, SquareError> {
    match selection.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(vec![Strategy::Sequential, Strategy::Pooled]),
        "sequential" | "seq" => Ok(vec![Strategy::Sequential]),
        "pooled" | "pool" | "threadpool" => Ok(vec![Strategy::Pooled]),
        other => Err(SquareError::Config(format!("unknown strategy: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all() {
        let strategies = get_strategies_to_run("all").unwrap();
        assert_eq!(strategies, vec![Strategy::Sequential, Strategy::Pooled]);
    }

    #[test]
    fn select_single() {
        assert_eq!(
            get_strategies_to_run("Pooled").unwrap(),
            vec![Strategy::Pooled]
        );
        assert_eq!(
            get_strategies_to_run("seq").unwrap(),
            vec![Strategy::Sequential]
        );
    }

    #[test]
    fn select_unknown() {
        assert!(matches!(
            get_strategies_to_run("async"),
            Err(SquareError::Config(_))
        ));
    }
}
