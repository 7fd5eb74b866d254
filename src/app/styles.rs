pub const LOADER_SIZE_PX: u32 = 30;
pub const LOADER_COLOR: &str = "#123abc";

pub const APP_STYLES: &str = "
                body {
                    margin: 0;
                    font-family: sans-serif;
                }

                .initial-loading__section {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 100%;
                    height: 100vh;
                }

                .pulse-loader {
                    display: flex;
                    gap: 2px;
                }

                .pulse-loader__dot {
                    display: inline-block;
                    border-radius: 100%;
                    animation: pulse-loader 0.75s infinite cubic-bezier(0.2, 0.68, 0.18, 1.08);
                    animation-fill-mode: both;
                }

                @keyframes pulse-loader {
                    0% { transform: scale(1); opacity: 1; }
                    45% { transform: scale(0.1); opacity: 0.7; }
                    80% { transform: scale(1); opacity: 1; }
                }

                .entry-page {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 16px;
                    padding: 40px 20px;
                }

                .entry-page__action {
                    padding: 10px 32px;
                    border: none;
                    border-radius: 4px;
                    background: #123abc;
                    color: #fff;
                    cursor: pointer;
                }

                .attendance-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 12px;
                    padding: 20px 32px;
                    border: 1px solid #ddd;
                    border-radius: 8px;
                }

                .attendance-card__times {
                    display: grid;
                    grid-template-columns: auto auto;
                    gap: 4px 16px;
                    margin: 0;
                }

                .update-worker-status {
                    position: fixed;
                    bottom: 4px;
                    right: 8px;
                    font-size: 0.75em;
                    color: #999;
                }
";
