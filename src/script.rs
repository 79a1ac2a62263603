// SPDX-License-Identifier: PMPL-1.0-or-later

//! Server-side script for hosting your own endpoint.
//!
//! Deploy it as a Google Apps Script web app ("Execute as: me", "Who has
//! access: anyone") and put the deployment URL in `[api] endpoint`.

/// Apps Script implementing the endpoint protocol spoken by [`crate::client`].
pub const APPS_SCRIPT: &str = r#"// tran endpoint: deploy as a Google Apps Script web app.
function doPost(e) {
  var p = e.parameter;
  var body;
  try {
    if (!p.target) {
      throw new Error('target is required');
    }
    var text = LanguageApp.translate(p.text || '', p.srouce || '', p.target);
    body = { code: 200, text: text, message: '' };
  } catch (err) {
    body = { code: 400, text: '', message: 'Exception: ' + err.message };
  }
  return ContentService
    .createTextOutput(JSON.stringify(body))
    .setMimeType(ContentService.MimeType.JSON);
}
"#;
