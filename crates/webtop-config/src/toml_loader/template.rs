//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# webtop configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[server]
# bind = "0.0.0.0"
# port = 8080                 # $PORT and --port take precedence
# static_root = "."           # directory served for GET requests
# max_body_bytes = 1048576    # 1024-67108864
# read_timeout_secs = 30      # 1-3600, idle clients are disconnected

[executor]
# timeout_secs = 30           # 1-3600, commands past this report exit 124
# shell = ""                  # empty = /bin/sh (unix) or cmd.exe (windows)

[terminal]
# server_url = "http://127.0.0.1:8080"
# connect_timeout_secs = 10   # 1-120
# request_timeout_secs = 60   # must exceed executor.timeout_secs

[logging]
# level = "INFO"              # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
