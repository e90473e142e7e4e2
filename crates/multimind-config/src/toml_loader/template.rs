//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub fn default_config_toml() -> &'static str {
    r##"# MultiMind Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "MultiMind"
# width = 1280
# height = 800
# min_width = 800
# min_height = 600
# hide_on_close = false   # true by default on macOS

[layout]
# left_rail_width = 65.0     # 40-200
# right_panel_width = 250.0  # 150-600
# panel_visible = false

[startup]
# default_service = "gemini"  # gemini, chatgpt, manus, perplexity, grok, deepseek, claude

[scratch]
# dir_name = "temp-clipboard"

[webview]
# devtools = false
# user_agent = ""
# shell_dir = ""   # serve the shell UI from a directory (development)

[logging]
# level = "info"   # trace, debug, info, warn, error
"##
}
