//! The compiled-in table of hosted chat services.

use multimind_common::ServiceDescriptor;

/// `(key, url, display name)` for every hosted service, in sidebar order.
pub const BUILT_IN_SERVICES: &[(&str, &str, &str)] = &[
    ("gemini", "https://gemini.google.com/app", "Gemini"),
    ("chatgpt", "https://chatgpt.com/", "ChatGPT"),
    ("manus", "https://manus.im/app", "Manus"),
    ("perplexity", "https://www.perplexity.ai/", "Perplexity"),
    ("grok", "https://x.com/i/grok", "Grok"),
    ("deepseek", "https://chat.deepseek.com/", "DeepSeek"),
    ("claude", "https://claude.ai/new", "Claude"),
];

/// The service descriptors the shell creates surfaces for.
pub fn built_in_services() -> Vec<ServiceDescriptor> {
    BUILT_IN_SERVICES
        .iter()
        .map(|(key, url, name)| ServiceDescriptor::new(*key, *url, *name))
        .collect()
}

/// Whether `key` names a built-in service.
pub fn is_known_service(key: &str) -> bool {
    BUILT_IN_SERVICES.iter().any(|(k, _, _)| *k == key)
}
