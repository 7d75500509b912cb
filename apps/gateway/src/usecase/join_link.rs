//! 参加リンクの組み立て

/// Roblox クライアント起動用のディープリンク
const DEEP_LINK_BASE: &str = "roblox://experiences/start";
/// ブラウザ経由の参加 URL
const WEB_JOIN_BASE: &str = "https://www.roblox.com/games/start";
/// ゲームページ
const GAME_PAGE_BASE: &str = "https://www.roblox.com/games";

/// プレイスへの参加リンク一式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinLinks {
   pub deep_link: String,
   pub web_join:  String,
   pub game_page: String,
}

impl JoinLinks {
   /// プレイス ID と（あれば）サーバーインスタンス ID から参加リンクを組み立てる
   ///
   /// ```
   /// use rbxproxy_gateway::usecase::JoinLinks;
   ///
   /// let links = JoinLinks::build(1818, None);
   /// assert_eq!(links.deep_link, "roblox://experiences/start?placeId=1818");
   /// assert_eq!(links.game_page, "https://www.roblox.com/games/1818");
   /// ```
   pub fn build(place_id: u64, game_instance_id: Option<&str>) -> Self {
      let query = match game_instance_id.filter(|id| !id.is_empty()) {
         Some(instance) => format!(
            "placeId={}&gameInstanceId={}",
            place_id,
            urlencoding::encode(instance)
         ),
         None => format!("placeId={}", place_id),
      };

      Self {
         deep_link: format!("{}?{}", DEEP_LINK_BASE, query),
         web_join:  format!("{}?{}", WEB_JOIN_BASE, query),
         game_page: format!("{}/{}", GAME_PAGE_BASE, place_id),
      }
   }
}
