//! Global CSS styles for Sweetheart.
//!
//! Every animation class the core names (`animate-shake`, `animate-jelly`,
//! ...) has a keyframe here.

pub const GLOBAL_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Dancing+Script:wght@500;700&family=Quicksand:wght@400;500;700&display=swap');

/* === CSS Custom Properties === */
:root {
  /* BLUSH (Backgrounds) */
  --blush: #fff1f3;
  --blush-deep: #ffe4e8;

  /* ROSE (Primary, the "Yes") */
  --rose: hsl(350, 65%, 60%);
  --rose-soft: hsla(350, 65%, 60%, 0.3);
  --rose-faint: hsla(350, 65%, 60%, 0.1);

  /* PEACH (Accent, sparkles) */
  --peach: hsl(25, 80%, 70%);
  --peach-faint: hsla(25, 80%, 70%, 0.1);

  /* TEXT */
  --text-primary: #4a2c35;
  --text-secondary: rgba(74, 44, 53, 0.7);
  --text-muted: rgba(74, 44, 53, 0.5);
  --text-faint: rgba(74, 44, 53, 0.4);

  /* Typography */
  --font-script: 'Dancing Script', cursive;
  --font-body: 'Quicksand', 'Segoe UI', sans-serif;

  /* Motion */
  --spring: cubic-bezier(0.68, -0.55, 0.265, 1.55);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: linear-gradient(160deg, var(--blush) 0%, var(--blush-deep) 100%);
  color: var(--text-primary);
  min-height: 100vh;
  overflow: hidden;
}

/* === Screens === */
.screen {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  position: relative;
  overflow: hidden;
  padding: 0 1rem;
  text-align: center;
}

/* === Intro === */
.intro-content { z-index: 10; }

.intro-greeting {
  font-size: 2rem;
  color: rgba(74, 44, 53, 0.8);
  margin-bottom: 1rem;
}

.intro-lead {
  font-family: var(--font-script);
  font-size: 3rem;
  color: var(--rose);
}

.intro-heart {
  display: inline-block;
  font-size: 3rem;
  margin-top: 1rem;
  color: var(--rose);
}

/* === Question === */
.question-header {
  z-index: 10;
  margin-bottom: 3rem;
}

.question-title {
  font-family: var(--font-script);
  font-size: 4.5rem;
  color: var(--rose);
  margin-bottom: 1.5rem;
}

.question-subtitle {
  font-size: 1.5rem;
  color: var(--text-secondary);
}

.options {
  display: flex;
  gap: 1.5rem;
  align-items: center;
  z-index: 10;
  position: relative;
}

.hint {
  margin-top: 2rem;
  font-size: 0.875rem;
  color: var(--text-muted);
  z-index: 10;
}

.affirmation {
  margin-top: 1rem;
  z-index: 10;
}

.affirmation p {
  font-family: var(--font-script);
  font-size: 1.5rem;
  color: var(--rose);
}

/* === Buttons === */
.btn-accept,
.btn-decline,
.btn-stray {
  font-family: var(--font-body);
  border-radius: 9999px;
  cursor: pointer;
}

.btn-accept {
  padding: 1.5rem 3rem;
  font-size: 1.5rem;
  font-weight: 700;
  color: #fff;
  background: var(--rose);
  border: none;
  box-shadow: 0 10px 30px -10px var(--rose-soft);
}

.btn-accept:hover {
  box-shadow: 0 0 40px var(--rose-soft);
}

.btn-decline {
  padding: 1rem 2rem;
  font-size: 1.125rem;
  font-weight: 500;
  color: rgba(74, 44, 53, 0.6);
  background: transparent;
  border: 2px solid var(--rose-soft);
}

.btn-decline:hover {
  border-color: hsla(350, 65%, 60%, 0.5);
}

.btn-stray {
  position: absolute;
  padding: 0.75rem 1.5rem;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-faint);
  background: transparent;
  border: 2px solid hsla(350, 65%, 60%, 0.2);
  z-index: 10;
}

.btn-stray:hover {
  animation: spin-away 0.5s ease-in forwards;
}

/* === Success === */
.success-content {
  z-index: 10;
  max-width: 36rem;
}

.success-kicker {
  font-size: 1.25rem;
  color: var(--text-muted);
  letter-spacing: 0.2em;
  text-transform: uppercase;
  margin-bottom: 1rem;
}

.success-title {
  font-family: var(--font-script);
  font-size: 6rem;
  color: var(--rose);
  margin-bottom: 2rem;
}

.success-longing { margin-bottom: 3rem; }

.success-line {
  font-size: 1.5rem;
  color: var(--text-secondary);
  line-height: 1.6;
}

.success-line-script {
  font-family: var(--font-script);
  font-size: 2rem;
  color: hsla(350, 65%, 60%, 0.8);
  margin-top: 0.5rem;
}

.success-together {
  display: inline-block;
  margin-bottom: 4rem;
}

.divider {
  width: 1px;
  height: 4rem;
  margin: 1.5rem auto;
  background: linear-gradient(to bottom, transparent, hsla(350, 65%, 60%, 0.4), transparent);
}

.together-title {
  font-family: var(--font-script);
  font-size: 2.5rem;
  color: rgba(74, 44, 53, 0.8);
}

.together-subtitle {
  font-size: 0.875rem;
  color: var(--text-faint);
  letter-spacing: 0.3em;
  text-transform: uppercase;
  margin-top: 0.75rem;
}

.closing-heart {
  display: inline-block;
  font-size: 2.5rem;
  color: var(--rose);
}

.glow-orbs {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

.glow-orb {
  position: absolute;
  border-radius: 9999px;
  filter: blur(64px);
}

.glow-orb-primary {
  top: 25%;
  left: 25%;
  width: 24rem;
  height: 24rem;
  background: var(--rose-faint);
}

.glow-orb-accent {
  bottom: 25%;
  right: 25%;
  width: 20rem;
  height: 20rem;
  background: var(--peach-faint);
}

/* === Decorative Overlays === */
.floating-hearts,
.sparkles,
.confetti {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
}

.floating-hearts { z-index: 0; }
.sparkles { z-index: 40; }
.confetti { z-index: 50; }

.floating-heart {
  position: absolute;
  bottom: -60px;
  color: var(--rose-soft);
  animation: float-heart linear infinite;
}

.sparkle {
  position: absolute;
  color: var(--peach);
  animation: sparkle 0.6s ease-out forwards;
}

.confetti-piece {
  position: absolute;
  bottom: 0;
  border-radius: 9999px;
  opacity: 0.6;
  animation: confetti 3s ease-out infinite;
}

/* === Animation Classes === */
.animate-fade-in-up { animation: fade-in-up 0.8s ease-out both; }
.animate-zoom-in { animation: zoom-in 0.5s ease-out both; }
.animate-slide-in-bottom { animation: slide-in-bottom 0.5s ease-out both; }
.animate-heartbeat { animation: heartbeat 1.5s ease-in-out infinite; }
.animate-pulse-love { animation: pulse-love 2s ease-in-out infinite; }

.animate-shake { animation: shake 0.5s ease-in-out; }
.animate-spin-away { animation: spin-away 0.5s ease-in-out; }
.animate-shrink { animation: shrink 0.5s ease-in-out; }
.animate-rainbow { animation: rainbow 0.5s linear; }
.animate-jelly { animation: jelly 0.5s ease-in-out; }
.animate-float-away { animation: float-away 0.8s ease-in forwards; }

/* === Keyframes === */
@keyframes fade-in-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes zoom-in {
  from { opacity: 0; transform: scale(0.5); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes slide-in-bottom {
  from { opacity: 0; transform: translateY(40px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes heartbeat {
  0%, 100% { transform: scale(1); }
  14% { transform: scale(1.1); }
  28% { transform: scale(1); }
  42% { transform: scale(1.1); }
  70% { transform: scale(1); }
}

@keyframes pulse-love {
  0%, 100% { opacity: 1; transform: scale(1); }
  50% { opacity: 0.7; transform: scale(1.05); }
}

@keyframes shake {
  0%, 100% { translate: 0 0; }
  20%, 60% { translate: -10px 0; }
  40%, 80% { translate: 10px 0; }
}

@keyframes spin-away {
  from { rotate: 0deg; scale: 1; }
  to { rotate: 360deg; scale: 0.8; }
}

@keyframes shrink {
  0%, 100% { scale: 1; }
  50% { scale: 0.3; }
}

@keyframes rainbow {
  0% { filter: hue-rotate(0deg); }
  100% { filter: hue-rotate(360deg); }
}

@keyframes jelly {
  0%, 100% { scale: 1 1; }
  30% { scale: 1.25 0.75; }
  40% { scale: 0.75 1.25; }
  50% { scale: 1.15 0.85; }
  65% { scale: 0.95 1.05; }
  75% { scale: 1.05 0.95; }
}

@keyframes float-away {
  0% { opacity: 1; translate: 0 0; }
  100% { opacity: 0; translate: 0 -120px; }
}

@keyframes float-heart {
  0% { transform: translateY(0) rotate(0deg); opacity: 0; }
  10% { opacity: 1; }
  100% { transform: translateY(-110vh) rotate(20deg); opacity: 0; }
}

@keyframes sparkle {
  0% { opacity: 0; transform: scale(0) rotate(0deg); }
  50% { opacity: 1; transform: scale(1) rotate(90deg); }
  100% { opacity: 0; transform: scale(0) rotate(180deg); }
}

@keyframes confetti {
  0% { transform: translateY(0); opacity: 0.6; }
  100% { transform: translateY(-100vh) rotate(720deg); opacity: 0; }
}
"#;
