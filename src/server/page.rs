//! Server-rendered game page
//!
//! One HTML page with the hex letters, the player's current state, and a
//! small script that posts submissions to `/submit` and patches the DOM from
//! the JSON response. All dynamic values come from the session and the
//! dictionary, so nothing user-controlled is interpolated.

use crate::core::Puzzle;
use crate::game::GameView;

const HEX_POSITIONS: [&str; 6] = [
    "top",
    "top-right",
    "bottom-right",
    "bottom",
    "bottom-left",
    "top-left",
];

/// Render the full game page
#[must_use]
pub fn render(puzzle: &Puzzle, date_long: &str, found_words: &[String], view: &GameView) -> String {
    let center = (puzzle.center() as char).to_ascii_uppercase().to_string();

    let mut outer_hexes = String::new();
    for (letter, position) in puzzle.outer().iter().zip(HEX_POSITIONS) {
        let upper = (*letter as char).to_ascii_uppercase();
        outer_hexes.push_str(&format!(
            "<div class=\"hexagon hex-{position}\" onclick=\"addLetter('{upper}')\">{upper}</div>\n"
        ));
    }

    let mut word_items = String::new();
    for word in found_words.iter().rev() {
        word_items.push_str(&format!(
            "<div class=\"word-item\">{}</div>\n",
            word.to_uppercase()
        ));
    }

    let mut progress_dots = String::new();
    for i in 0..10 {
        let filled = if i < view.progress { " filled" } else { "" };
        progress_dots.push_str(&format!("<div class=\"progress-dot{filled}\"></div>"));
    }

    let mut letters_js = String::from("[");
    letters_js.push_str(&format!("'{}'", puzzle.center() as char));
    for &b in puzzle.outer() {
        letters_js.push_str(&format!(",'{}'", b as char));
    }
    letters_js.push(']');

    TEMPLATE
        .replace("__DATE__", date_long)
        .replace("__RANK__", view.rank)
        .replace("__PROGRESS_DOTS__", &progress_dots)
        .replace("__CENTER__", &center)
        .replace("__OUTER_HEXES__", &outer_hexes)
        .replace("__FOUND_COUNT__", &view.found_count.to_string())
        .replace("__SCORE__", &view.score.to_string())
        .replace("__TOTAL__", &view.total_possible.to_string())
        .replace("__WORD_ITEMS__", &word_items)
        .replace("__LETTERS__", &letters_js)
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="sw">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Spelling Bee - Kiswahili</title>
<style>
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; background: #f7f7f7; min-height: 100vh; padding: 20px; }
.container { max-width: 1100px; margin: 0 auto; display: grid; grid-template-columns: 1fr 360px; gap: 30px; }
@media (max-width: 900px) { .container { grid-template-columns: 1fr; } }
.header { grid-column: 1 / -1; text-align: center; }
h1 { font-size: 2.2em; margin-bottom: 8px; }
.daily-badge { display: inline-block; background: #667eea; color: white; padding: 8px 20px; border-radius: 20px; font-size: 0.9em; font-weight: 600; }
.game-area, .sidebar { background: white; border-radius: 15px; padding: 30px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
.rank { text-align: center; margin-bottom: 24px; padding: 15px; background: #fef3c7; border-radius: 10px; }
.rank-name { font-size: 1.4em; font-weight: bold; color: #f59e0b; }
.progress { display: flex; gap: 3px; margin-top: 10px; }
.progress-dot { flex: 1; height: 8px; background: #fde68a; border-radius: 4px; }
.progress-dot.filled { background: #f59e0b; }
.hex-grid { position: relative; width: 280px; height: 250px; margin: 30px auto; }
.hexagon { position: absolute; width: 80px; height: 80px; display: flex; align-items: center; justify-content: center; font-size: 1.8em; font-weight: bold; cursor: pointer; user-select: none; background: #e8e8e8; clip-path: polygon(25% 0%, 75% 0%, 100% 50%, 75% 100%, 25% 100%, 0% 50%); }
.hexagon:hover { background: #d4d4d4; }
.hexagon.center { background: #fbbf24; }
.hex-center { top: 100px; left: 100px; }
.hex-top { top: 15px; left: 100px; }
.hex-top-right { top: 60px; left: 168px; }
.hex-bottom-right { top: 145px; left: 168px; }
.hex-bottom { top: 185px; left: 100px; }
.hex-bottom-left { top: 145px; left: 32px; }
.hex-top-left { top: 55px; left: 32px; }
.word-display { font-size: 1.8em; min-height: 40px; text-align: center; letter-spacing: 3px; font-weight: 500; }
.message { text-align: center; min-height: 28px; font-weight: 600; }
.message.success { color: #065f46; }
.message.error { color: #991b1b; }
.controls { display: flex; gap: 10px; justify-content: center; }
button { padding: 12px 24px; font-size: 1em; border: 2px solid #ddd; background: white; border-radius: 25px; cursor: pointer; font-weight: 600; }
.btn-enter { background: #000; color: white; border-color: #000; }
.score-item { display: flex; justify-content: space-between; margin-bottom: 10px; padding: 10px; background: #f9fafb; border-radius: 8px; }
.found-words h3 { margin: 20px 0 10px; }
.word-item { padding: 8px 10px; margin-bottom: 2px; background: #f9fafb; border-radius: 8px; font-weight: 600; }
</style>
</head>
<body>
<div class="container">
  <div class="header">
    <h1>🐝 Spelling Bee - Kiswahili</h1>
    <p>Tengeneza maneno mengi iwezekanavyo!</p>
    <div class="daily-badge">📅 Changamoto ya Leo: __DATE__</div>
  </div>
  <div class="game-area">
    <div class="rank">
      <div>Cheo Chako</div>
      <div class="rank-name" id="rank">__RANK__</div>
      <div class="progress" id="progress">__PROGRESS_DOTS__</div>
    </div>
    <div class="word-display" id="currentWord"></div>
    <div id="message" class="message"></div>
    <div class="hex-grid">
      <div class="hexagon center hex-center" onclick="addLetter('__CENTER__')">__CENTER__</div>
__OUTER_HEXES__
    </div>
    <div class="controls">
      <button onclick="deleteLetter()">Futa</button>
      <button class="btn-enter" onclick="submitWord()">Wasilisha</button>
    </div>
  </div>
  <div class="sidebar">
    <div class="score-item"><span>Maneno</span><span id="wordCount">__FOUND_COUNT__</span></div>
    <div class="score-item"><span>Alama</span><span id="score">__SCORE__</span></div>
    <div class="score-item"><span>Zinazowezekana</span><span>__TOTAL__</span></div>
    <div class="found-words">
      <h3>Maneno Yaliyopatikana</h3>
      <div id="foundWords">
__WORD_ITEMS__
      </div>
    </div>
  </div>
</div>
<script>
let currentWord = '';
const letters = __LETTERS__;
function addLetter(letter) { currentWord += letter.toLowerCase(); updateDisplay(); }
function deleteLetter() { currentWord = currentWord.slice(0, -1); updateDisplay(); }
function updateDisplay() { document.getElementById('currentWord').textContent = currentWord.toUpperCase(); }
function showMessage(text, type) {
  const msg = document.getElementById('message');
  msg.textContent = text;
  msg.className = 'message ' + type;
  setTimeout(() => { msg.textContent = ''; msg.className = 'message'; }, 3000);
}
function updateProgress(progress) {
  const bar = document.getElementById('progress');
  bar.innerHTML = '';
  for (let i = 0; i < 10; i++) {
    const dot = document.createElement('div');
    dot.className = 'progress-dot' + (i < progress ? ' filled' : '');
    bar.appendChild(dot);
  }
}
function submitWord() {
  const word = currentWord;
  currentWord = '';
  updateDisplay();
  fetch('/submit', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify({word: word})
  })
  .then(r => r.json())
  .then(data => {
    if (data.success) {
      showMessage(data.message, 'success');
      document.getElementById('wordCount').textContent = data.found_count;
      document.getElementById('score').textContent = data.score;
      document.getElementById('rank').textContent = data.rank;
      const item = document.createElement('div');
      item.className = 'word-item';
      item.textContent = word.toUpperCase();
      const list = document.getElementById('foundWords');
      list.insertBefore(item, list.firstChild);
      updateProgress(data.progress);
    } else {
      showMessage(data.message, 'error');
    }
  });
}
document.addEventListener('keydown', (e) => {
  const key = e.key.toLowerCase();
  if (letters.includes(key)) { addLetter(key); }
  else if (e.key === 'Backspace') { deleteLetter(); }
  else if (e.key === 'Enter') { submitWord(); }
});
</script>
</body>
</html>
"#;
