use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("ideacheck.yaml")
}

pub fn default_snippet_limit() -> usize {
    200
}

pub fn default_ellipsis() -> String {
    "...".to_string()
}

pub fn default_untitled_title() -> String {
    "Untitled Finding".to_string()
}

pub fn default_link_text() -> String {
    "Read more".to_string()
}

pub fn default_link_url() -> String {
    "#".to_string()
}
