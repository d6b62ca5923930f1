//! Page styles for the preview window.
//!
//! A saturated backdrop so the glass has something to blur.

pub const GLOBAL_STYLES: &str = r#"
* {
  box-sizing: border-box;
}

html, body {
  margin: 0;
  min-height: 100vh;
}

.preview {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 24px;
  padding: 32px;
}

.preview--light {
  background: linear-gradient(135deg, #667eea 0%, #764ba2 50%, #f093fb 100%);
  color: #1a1a2e;
}

.preview--dark {
  background: linear-gradient(135deg, #0f0c29 0%, #302b63 50%, #24243e 100%);
  color: #f5f5f5;
}

.preview__caption {
  font-family: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  font-size: 0.8rem;
  opacity: 0.8;
}

.preview__log {
  font-family: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  font-size: 0.75rem;
  opacity: 0.7;
  min-height: 1.2em;
}
"#;
