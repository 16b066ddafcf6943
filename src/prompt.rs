//! Builds the instruction text sent to the model.
//!
//! Composition is pure string interpolation: the same request and quirks always
//! produce byte-identical output.

use crate::types::{GenerationRequest, Message};

/// Fixed system instruction shared by every vendor.
pub const SYSTEM_INSTRUCTION: &str = "你是一个专业的游戏开发助手，精通HTML5游戏开发。只输出完整的HTML代码，不要有任何解释性文本。代码应当可以直接运行，并在底部包含简短的游戏说明。同时语言为中文，代码中包含中文注释。不能有游戏分辨率超过容器等问题。";

const BASE_CONSTRAINTS: [&str; 5] = [
    "生成一个完整的HTML文件，包含所有必要的CSS和JavaScript代码",
    "确保代码可以直接在浏览器中运行，不依赖任何外部文件或CDN",
    "代码需要清晰易读，包含适当的注释",
    "使用现代ES6+语法",
    "确保游戏具有响应式设计",
];

const PACING_CONSTRAINT: &str = "游戏速度必须适中，不要太快，确保玩家有足够的反应时间";

/// Vendor-specific additions to the instruction template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptQuirks {
    /// Game type that gets an extra "keep the pace moderate" constraint.
    pub paced_game: Option<&'static str>,
}

/// Compose the user instruction without vendor quirks.
pub fn compose(request: &GenerationRequest) -> String {
    compose_with(request, &PromptQuirks::default())
}

/// Compose the user instruction, applying `quirks`.
pub fn compose_with(request: &GenerationRequest, quirks: &PromptQuirks) -> String {
    let mut constraints: Vec<String> = BASE_CONSTRAINTS.iter().map(|c| c.to_string()).collect();

    if quirks.paced_game == Some(request.game_type()) {
        constraints.push(PACING_CONSTRAINT.to_string());
    }
    if let Some(icon) = request.custom_icon() {
        constraints.push(format!("使用以下图标：{icon}"));
    }

    let numbered = constraints
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {c}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    let text = format!(
        "请直接生成一个完整的{game_type}游戏HTML文件，不需要解释代码。\n\
         具体要求如下：\n\
         {prompt}\n\
         \n\
         技术要求：\n\
         {numbered}\n\
         \n\
         在HTML底部添加简短的游戏说明，不要在回复中添加任何其他解释性文本。\n\
         直接输出完整的HTML代码，不要有任何前缀或后缀说明。",
        game_type = request.game_type(),
        prompt = request.prompt(),
    );

    text.trim().to_string()
}

/// The system + user message pair for one generation.
pub fn messages(request: &GenerationRequest, quirks: &PromptQuirks) -> Vec<Message> {
    vec![
        Message::system(SYSTEM_INSTRUCTION),
        Message::user(compose_with(request, quirks)),
    ]
}
