use {crate::domain::id::PurchaseKey, url::Url};

pub const WIDGET_NODE: &str = "openpix-order";

/// Script URL for the OpenPix QR-code widget bound to one charge.
pub fn widget_script_url(plugin_url: &Url, app_id: &str, correlation_id: &PurchaseKey) -> Url {
    let mut url = plugin_url.clone();
    url.set_path("/v1/openpix.js");
    url.query_pairs_mut()
        .clear()
        .append_pair("appID", app_id)
        .append_pair("correlationID", correlation_id.as_str())
        .append_pair("node", WIDGET_NODE);
    url
}

/// Receipt fragment: the widget mount point, its script, and a listener that
/// reloads the page once OpenPix reports the charge as paid.
pub fn payment_instructions(plugin_url: &Url, app_id: &str, correlation_id: &PurchaseKey) -> String {
    let script = widget_script_url(plugin_url, app_id, correlation_id);
    let src = script.as_str().replace('&', "&amp;");
    format!(
        r#"<div id="{WIDGET_NODE}"></div>
<script src="{src}"></script>
<script>
    window.$openpix.addEventListener(function (e) {{
        if (e.type === 'PAYMENT_STATUS') {{
            if (e.data.status === 'COMPLETED') {{
                location.reload();
            }}
        }}
    }});
</script>
"#
    )
}
