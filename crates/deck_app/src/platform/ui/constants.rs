pub const LINE_WIDTH: usize = 78;
pub const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
pub const TICKER_COLUMN: usize = 8;
pub const COMMENTS_COLUMN: usize = 10;
pub const SENTIMENT_COLUMN: usize = 12;
