use log::warn;
use stylist::GlobalStyle;

const GLOBAL_CSS: &str = r#"
* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    font-family: 'Pretendard', -apple-system, BlinkMacSystemFont, sans-serif;
    background: #fafafa;
    color: #1f1f1f;
    -webkit-font-smoothing: antialiased;
}

.landing-page {
    max-width: 480px;
    margin: 0 auto;
    background: #ffffff;
    overflow-x: hidden;
}

.hero-header {
    position: relative;
    padding: 48px 24px 32px;
    text-align: center;
}

.hero-logo {
    height: 28px;
}

.hero-title {
    margin-top: 16px;
    font-size: 22px;
    font-weight: 700;
    line-height: 1.4;
}

.hero-frame, .hero-house {
    width: 100%;
    margin-top: 24px;
}

.tab-bar {
    position: sticky;
    top: 0;
    z-index: 50;
    height: 72px;
    background: #ffffff;
    border-bottom: 1px solid #eeeeee;
}

.tab-list {
    display: flex;
    height: 100%;
}

.tab-item {
    flex: 1;
    border: none;
    background: none;
    font-size: 15px;
    color: #9a9a9a;
    cursor: pointer;
    border-bottom: 2px solid transparent;
    transition: color 0.2s ease, border-color 0.2s ease;
}

.tab-item.active {
    color: #1f1f1f;
    font-weight: 700;
    border-bottom-color: #1f1f1f;
}

.section {
    padding: 64px 24px;
    text-align: center;
}

.section-icon img {
    height: 40px;
}

.section-label {
    margin-top: 8px;
    font-size: 14px;
    color: #6b7bff;
    font-weight: 600;
}

.section-title, .letter-title {
    margin-top: 16px;
    font-size: 22px;
    font-weight: 700;
    line-height: 1.45;
}

.section-subtitle {
    margin-top: 12px;
    font-size: 15px;
    line-height: 1.6;
    color: #6f6f6f;
}

.fade-in {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.fade-in.visible {
    opacity: 1;
    transform: translateY(0);
}

.card-scroll {
    display: flex;
    gap: 16px;
    margin-top: 32px;
    overflow-x: auto;
    scroll-snap-type: x mandatory;
}

.photo-card {
    flex: 0 0 260px;
    scroll-snap-align: center;
    border-radius: 16px;
    background: #ffffff;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
    text-align: left;
    overflow: hidden;
}

.photo-card.dimmed {
    opacity: 0.5;
}

.card-header {
    display: flex;
    align-items: center;
    gap: 8px;
    padding: 12px;
}

.avatar {
    width: 28px;
    height: 28px;
    border-radius: 50%;
    background: #d9d9d9;
}

.card-image {
    height: 180px;
}

.card-image.warm { background: linear-gradient(135deg, #ffd9b3, #ffb38a); }
.card-image.blue { background: linear-gradient(135deg, #b3d4ff, #8ab4ff); }

.card-body {
    padding: 12px;
}

.card-date {
    font-size: 12px;
    color: #9a9a9a;
}

.card-text {
    margin-top: 6px;
    font-size: 14px;
    line-height: 1.5;
}

.letter-stack-wrapper {
    display: flex;
    justify-content: center;
    margin-top: 32px;
}

.letter-card-stack {
    position: relative;
    width: 260px;
    height: 413px;
}

.swipe-card {
    position: absolute;
    inset: 0;
    touch-action: none;
    user-select: none;
    transition: transform 0.3s ease, opacity 0.3s ease, filter 0.3s ease;
}

.swipe-card.front {
    cursor: grab;
}

.swipe-card.front:active {
    cursor: grabbing;
}

.letter-image {
    width: 100%;
    height: 100%;
    pointer-events: none;
}

.voice-section {
    margin-top: 96px;
}

.tape-image {
    width: 220px;
    margin-top: 24px;
}

.voice-player {
    display: flex;
    align-items: center;
    gap: 12px;
    margin: 24px auto 0;
    max-width: 320px;
}

.voice-toggle {
    width: 40px;
    height: 40px;
    border: none;
    border-radius: 50%;
    background: #1f1f1f;
    color: #ffffff;
    cursor: pointer;
}

.voice-toggle.playing {
    background: #6b7bff;
}

.voice-track {
    flex: 1;
}

.voice-bar {
    position: relative;
    height: 6px;
    border-radius: 3px;
    background: #e5e5e5;
    cursor: pointer;
}

.voice-bar-fill {
    height: 100%;
    border-radius: 3px;
    background: #6b7bff;
}

.voice-time {
    display: flex;
    justify-content: space-between;
    margin-top: 6px;
    font-size: 12px;
    color: #9a9a9a;
}

.voice-text {
    margin-top: 12px;
    font-size: 12px;
    color: #9a9a9a;
}

.my-hall-mockup {
    width: 100%;
    margin-top: 32px;
}

.reserve {
    background: #f4f5ff;
}

.reserve-info {
    font-size: 20px;
    font-weight: 700;
}

.reserve-label {
    margin-top: 24px;
    font-size: 13px;
    color: #6b7bff;
    font-weight: 600;
}

.reserve-content {
    margin-top: 6px;
    font-size: 15px;
}

.reserve-guide {
    margin-top: 32px;
    font-size: 14px;
    color: #6f6f6f;
}

.reserve-form {
    margin-top: 16px;
    padding: 20px;
    border-radius: 16px;
    background: #ffffff;
}

.form-row {
    display: flex;
    gap: 16px;
}

.form-column {
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.form-column:last-child {
    flex: 1;
}

.form-label {
    height: 40px;
    line-height: 40px;
    font-size: 14px;
    text-align: left;
}

.form-input {
    height: 40px;
    padding: 0 12px;
    border: 1px solid #e0e0e0;
    border-radius: 8px;
    font-size: 14px;
}

.gender-toggle {
    display: flex;
    gap: 8px;
    height: 40px;
}

.gender-button {
    flex: 1;
    border: 1px solid #e0e0e0;
    border-radius: 8px;
    background: #ffffff;
    cursor: pointer;
}

.gender-button.active {
    border-color: #6b7bff;
    color: #6b7bff;
    font-weight: 700;
}

.reserve-submit {
    width: 100%;
    height: 48px;
    margin-top: 20px;
    border: none;
    border-radius: 12px;
    background: #1f1f1f;
    color: #ffffff;
    font-size: 16px;
    cursor: pointer;
}

.reserve-submit.busy {
    opacity: 0.6;
    cursor: progress;
}

.reserve-cta {
    border: none;
    border-radius: 999px;
    padding: 12px 24px;
    background: #6b7bff;
    color: #ffffff;
    font-size: 15px;
    font-weight: 700;
    cursor: pointer;
}

.reserve-cta.inline {
    margin-top: 24px;
}

.reserve-cta.floating {
    position: fixed;
    left: 50%;
    bottom: 24px;
    z-index: 40;
    transform: translateX(-50%);
    box-shadow: 0 6px 20px rgba(107, 123, 255, 0.4);
}

.modal-overlay, .picker-overlay {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.5);
}

.confirm-box, .date-picker {
    width: calc(100% - 48px);
    max-width: 360px;
    padding: 24px;
    border-radius: 16px;
    background: #ffffff;
}

.confirm-text {
    font-size: 16px;
    line-height: 1.5;
    text-align: center;
}

.confirm-button {
    width: 100%;
    height: 44px;
    margin-top: 20px;
    border: none;
    border-radius: 10px;
    background: #1f1f1f;
    color: #ffffff;
    cursor: pointer;
}

.date-picker-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.year-month-selects {
    display: flex;
    gap: 8px;
}

.picker-select {
    height: 32px;
    padding: 0 8px;
    border: 1px solid #e0e0e0;
    border-radius: 6px;
}

.picker-close {
    border: none;
    background: none;
    font-size: 20px;
    cursor: pointer;
}

.weekday-row, .week-row {
    display: grid;
    grid-template-columns: repeat(7, 1fr);
    text-align: center;
}

.weekday-row {
    margin-top: 16px;
    font-size: 12px;
    color: #9a9a9a;
}

.days-grid {
    margin-top: 8px;
}

.day-cell {
    height: 36px;
    border: none;
    border-radius: 50%;
    background: none;
    font-size: 14px;
    cursor: pointer;
}

.day-cell.empty {
    cursor: default;
}

.day-cell.selected {
    background: #6b7bff;
    color: #ffffff;
}

.footer, .footer-contacts {
    background: #1f1f1f;
    color: #bdbdbd;
    font-size: 12px;
}

.footer {
    padding: 32px 24px 16px;
}

.footer-contacts {
    padding: 0 24px 120px;
}

.footer-row {
    display: flex;
    gap: 8px;
    margin-top: 6px;
}

.footer-label {
    color: #8a8a8a;
}
"#;

/// Registers the page-wide stylesheet once at startup.
pub fn install_global_style() {
    // The style manager keeps registered styles mounted after the handle drops.
    if let Err(e) = GlobalStyle::new(GLOBAL_CSS) {
        warn!("Failed to install global style: {}", e);
    }
}
