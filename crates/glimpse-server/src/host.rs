//! Host page: the preview in a sandboxed frame with a console panel.
//!
//! The page relays console lines posted by the frame to the server over the
//! WebSocket and reloads the frame when the server reports a new build.

/// Host page served at `/`.
pub const HOST_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>glimpse</title>
  <style>
    html, body { height: 100%; margin: 0; }
    body {
      display: grid;
      grid-template-rows: 1fr 12rem;
      background: #0f172a;
      font-family: system-ui, sans-serif;
    }
    iframe { width: 100%; height: 100%; border: 0; background: white; }
    #console {
      margin: 0;
      padding: 0.5rem 1rem;
      overflow-y: auto;
      border-top: 1px solid #334155;
      color: #e2e8f0;
      font: 12px/1.5 ui-monospace, monospace;
    }
    #console .warn { color: #facc15; }
    #console .error { color: #f87171; }
    #console .debug { color: #94a3b8; }
  </style>
</head>
<body>
  <iframe id="preview" src="/__preview" sandbox="allow-scripts allow-forms allow-modals allow-popups"></iframe>
  <pre id="console"></pre>
  <script>
(function () {
  'use strict';

  var frame = document.getElementById('preview');
  var panel = document.getElementById('console');
  var socket = null;

  function append(message) {
    var match = /^\[(\w+)\]/.exec(message);
    var line = document.createElement('div');
    line.className = match ? match[1] : 'log';
    line.textContent = message;
    panel.appendChild(line);
    panel.scrollTop = panel.scrollHeight;
  }

  window.addEventListener('message', function (event) {
    if (event.source !== frame.contentWindow) return;
    var data = event.data;
    if (!data || data.type !== 'console') return;

    var message = String(data.message);
    append(message);
    if (socket && socket.readyState === WebSocket.OPEN) {
      socket.send(JSON.stringify({ type: 'console', message: message }));
    }
  });

  function connect(attempt) {
    var scheme = location.protocol === 'https:' ? 'wss://' : 'ws://';
    socket = new WebSocket(scheme + location.host + '/__ws');

    socket.onopen = function () { attempt = 0; };

    socket.onmessage = function (event) {
      var msg = JSON.parse(event.data);
      if (msg.type === 'reload') {
        panel.textContent = '';
        frame.src = '/__preview?t=' + Date.now();
      }
    };

    socket.onclose = function () {
      if (attempt < 10) {
        setTimeout(function () { connect(attempt + 1); }, 1000 * (attempt + 1));
      }
    };
  }

  connect(0);
})();
  </script>
</body>
</html>"##;
