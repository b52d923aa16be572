// src/cli/models.rs — `embedscope models`

use crate::infra::config::Config;

pub fn run_models(config: &Config) {
    print!("{}", format_models(config));
}

/// One model per line, the default marked with `*`.
pub fn format_models(config: &Config) -> String {
    config
        .model_choices()
        .iter()
        .map(|m| {
            let marker = if *m == config.models.default { '*' } else { ' ' };
            format!("{marker} {m}\n")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_marked() {
        let out = format_models(&Config::default());
        assert!(out.starts_with("* openai/text-embedding-3-small\n"));
        assert!(out.contains("  voyageai/voyage-3-lite\n"));
        assert_eq!(out.lines().count(), 9);
    }
}
