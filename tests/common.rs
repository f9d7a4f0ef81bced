//! Common test utilities for building UI nodes and node documents.
use authflow_ui::prelude::*;

/// A login flow's `ui` object with nodes from the default, password and oidc groups.
#[allow(dead_code)]
pub const LOGIN_UI_JSON: &str = r#"{
    "action": "https://auth.example.com/self-service/login?flow=5e1c",
    "method": "POST",
    "nodes": [
        {
            "type": "input",
            "group": "default",
            "attributes": {
                "node_type": "input",
                "name": "csrf_token",
                "type": "hidden",
                "value": "dG9rZW4=",
                "required": true,
                "disabled": false
            },
            "messages": [],
            "meta": {}
        },
        {
            "type": "input",
            "group": "default",
            "attributes": {
                "node_type": "input",
                "name": "identifier",
                "type": "text",
                "required": true,
                "disabled": false,
                "autocomplete": "username"
            },
            "messages": [],
            "meta": { "label": { "id": 1070004, "text": "ID", "type": "info" } }
        },
        {
            "type": "input",
            "group": "password",
            "attributes": {
                "node_type": "input",
                "name": "password",
                "type": "password",
                "required": true,
                "disabled": false,
                "autocomplete": "current-password"
            },
            "messages": [
                { "id": 4000006, "text": "The provided credentials are invalid.", "type": "error" }
            ],
            "meta": { "label": { "id": 1070001, "text": "Password", "type": "info" } }
        },
        {
            "type": "input",
            "group": "password",
            "attributes": {
                "node_type": "input",
                "name": "method",
                "type": "submit",
                "value": "password",
                "disabled": false,
                "label": { "id": 1010001, "text": "Sign in", "type": "info", "context": {} }
            },
            "messages": [],
            "meta": { "label": { "id": 1010001, "text": "Sign in", "type": "info" } }
        },
        {
            "type": "input",
            "group": "oidc",
            "attributes": {
                "node_type": "input",
                "name": "provider",
                "type": "submit",
                "value": "github",
                "disabled": false
            },
            "messages": [],
            "meta": {
                "label": {
                    "id": 1010002,
                    "text": "Sign in with github",
                    "type": "info",
                    "context": { "provider": "github" }
                }
            }
        },
        {
            "type": "a",
            "group": "default",
            "attributes": {
                "node_type": "a",
                "id": "forgot_password",
                "href": "https://auth.example.com/recovery",
                "title": { "id": 1050001, "text": "Forgot password?", "type": "info" }
            },
            "messages": [],
            "meta": {}
        }
    ]
}"#;

/// Group of each node in `LOGIN_UI_JSON`, in document order.
#[allow(dead_code)]
pub const LOGIN_UI_GROUPS: [&str; 6] = [
    "default", "default", "password", "password", "oidc", "default",
];

#[allow(dead_code)]
pub fn login_nodes() -> NodeCollection {
    NodeCollection::from_json(LOGIN_UI_JSON).expect("Failed to parse login fixture")
}

#[allow(dead_code)]
pub fn text(id: i64, text: &str) -> UiText {
    UiText::new(id, text)
}

#[allow(dead_code)]
pub fn meta(label: Option<&str>) -> UiNodeMeta {
    UiNodeMeta {
        label: label.map(|l| text(1, l)),
    }
}

/// Wraps attributes into a node of the given group.
#[allow(dead_code)]
pub fn node(group: &str, attributes: NodeAttributes, meta_label: Option<&str>) -> UiNode {
    UiNode {
        node_type: attributes.tag().to_string(),
        group: group.to_string(),
        attributes,
        messages: vec![],
        meta: meta(meta_label),
    }
}

#[allow(dead_code)]
pub fn anchor(id: &str, title: &str) -> NodeAttributes {
    NodeAttributes::Anchor(AnchorAttributes {
        id: id.to_string(),
        href: format!("https://auth.example.com/{}", id),
        title: text(2, title),
    })
}

#[allow(dead_code)]
pub fn image(id: &str) -> NodeAttributes {
    NodeAttributes::Image(ImageAttributes {
        id: id.to_string(),
        src: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        width: Some(256),
        height: Some(256),
    })
}

#[allow(dead_code)]
pub fn input(name: &str, label: Option<&str>) -> NodeAttributes {
    NodeAttributes::Input(InputAttributes {
        name: name.to_string(),
        input_type: "text".to_string(),
        value: None,
        required: None,
        disabled: false,
        label: label.map(|l| text(3, l)),
        pattern: None,
        autocomplete: None,
        onclick: None,
    })
}

#[allow(dead_code)]
pub fn text_node(id: &str, content: &str) -> NodeAttributes {
    NodeAttributes::Text(TextAttributes {
        id: id.to_string(),
        text: text(4, content),
    })
}

#[allow(dead_code)]
pub fn script(id: &str) -> NodeAttributes {
    NodeAttributes::Script(ScriptAttributes {
        id: id.to_string(),
        src: "https://auth.example.com/.well-known/webauthn.js".to_string(),
        is_async: true,
        script_type: "text/javascript".to_string(),
        ..ScriptAttributes::default()
    })
}

/// One node per known variant, grouped `default`, `password` and `oidc`.
#[allow(dead_code)]
pub fn mixed_nodes() -> Vec<UiNode> {
    vec![
        node("default", input("csrf_token", None), None),
        node("password", input("password", None), Some("Password")),
        node("oidc", input("provider", Some("GitHub")), Some("Sign in")),
        node("default", anchor("recovery", "Forgot password?"), None),
        node("totp", image("totp_qr"), Some("Authenticator app QR code")),
        node("password", text_node("hint", "Use 8+ characters"), Some("Hint")),
        node("webauthn", script("webauthn_script"), None),
    ]
}
