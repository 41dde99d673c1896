/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `panefit init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# panefit configuration
# Location: ~/.config/panefit/config.toml

[log]
# Minimum log level: "debug", "info", "warn", or "error".
# The RUST_LOG environment variable takes precedence.
level = "info"
# Output format: "text" or "json". Logs are written to stderr.
format = "text"

# Sizes and positions given on the command line are clamped to these bounds.
[limits]
min_width = 100
max_width = 3840
min_height = 100
max_height = 2160
min_position = 0
max_position = 5000

# Named sizes for `panefit preset <PID> <NAME>`.
# Add x and y to also move the window.
[[preset]]
name = "HD"
width = 1280
height = 720

[[preset]]
name = "FHD"
width = 1920
height = 1080

[[preset]]
name = "Square"
width = 800
height = 800

[[preset]]
name = "Small"
width = 640
height = 480

[[preset]]
name = "Wide"
width = 1200
height = 600

[[preset]]
name = "Custom 1"
width = 1860
height = 1000
x = 30
y = 30
"##
    .to_string()
}
