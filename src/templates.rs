//! Embedded template sources for the preview renderer.

/// Handlebars source for the standalone ad-card preview page produced by
/// the `preview` command. Layout variant fields arrive as CSS class
/// fragments; the gradient and placement arrive as ready-made CSS values.
pub const AD_CARD_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Ad preview | {{site_name}}</title>
    <style>
        body {
            font-family: {{theme.font_family}}, Arial, sans-serif;
            margin: 0;
            padding: 40px;
            background-color: {{#if theme.dark_mode}}#111827{{else}}#f4f4f4{{/if}};
            display: flex;
            justify-content: center;
        }
        .ad-card {
            position: relative;
            width: 640px;
            min-height: 280px;
            border-radius: 12px;
            overflow: hidden;
            box-shadow: 0 4px 16px rgba(0,0,0,0.15);
            background: {{gradient_css}};
        }
        .ad-card .overlay {
            position: absolute;
            inset: 0;
            background: rgba(0,0,0,0.25);
        }
        .ad-card .badge {
            position: absolute;
            top: 16px;
            right: 16px;
            padding: 6px 14px;
            border-radius: 999px;
            font-size: 0.8em;
            font-weight: bold;
            color: #fff;
            background: {{presentation.badge_color}};
        }
        .ad-card .copy {
            position: relative;
            padding: 48px 32px;
            color: {{presentation.text_color}};
        }
        .ad-card .copy h2 {
            margin: 0 0 8px;
            font-size: 2em;
        }
        .ad-card .copy p {
            margin: 0 0 16px;
        }
        .ad-card .copy a {
            color: {{theme.primary_color}};
            background: #fff;
            padding: 8px 18px;
            border-radius: 6px;
            text-decoration: none;
            font-weight: bold;
        }
        .lottie-slot {
            position: absolute;
            {{placement_css}};
        }
    </style>
</head>
<body>
    <div class="ad-card {{presentation.layout.container}} {{presentation.entrance}}">
        <div class="overlay {{presentation.layout.overlay}}"></div>
        <span class="badge {{presentation.layout.badge}}">{{badge_label}}</span>
        <div class="copy {{presentation.layout.text}}">
            <h2>{{ad.title}}</h2>
            <p>{{ad.description}}</p>
            <a href="{{ad.link}}">Learn more</a>
        </div>
        <div class="lottie-slot" data-animation="{{presentation.lottie}}"></div>
    </div>
</body>
</html>"#;
