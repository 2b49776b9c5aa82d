//! String template rendering utilities.

pub struct TemplateVars;

impl TemplateVars {
    pub const AGENT_NAME: &'static str = "agentName";
    pub const AGENT_PURPOSE: &'static str = "agentPurpose";
    pub const PACKAGE: &'static str = "package";
    pub const MODEL: &'static str = "model";
}

pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

pub fn is_present(template: &str, key: &str) -> bool {
    let placeholder = format!("{{{{{}}}}}", key);
    template.contains(&placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_placeholders() {
        let out = render("name={{agentName}}", &[(TemplateVars::AGENT_NAME, "Bot")]);
        assert_eq!(out, "name=Bot");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let out = render("{{unknown}}", &[(TemplateVars::AGENT_NAME, "Bot")]);
        assert_eq!(out, "{{unknown}}");
    }

    #[test]
    fn is_present_detects_placeholder() {
        assert!(is_present("x {{model}} y", TemplateVars::MODEL));
        assert!(!is_present("x y", TemplateVars::MODEL));
    }
}
