pub struct GameRenderState {
    pub level_label: String,
    pub won: bool,
}
