use crate::{error::Result, model::Playlist, spotify::CatalogApi};

/// Fetches a playlist and every page of its tracks.
///
/// The first response carries the playlist metadata and the first page of
/// items; the remaining pages are pulled with [`pull_remaining_tracks`].
pub async fn pull_playlist<C: CatalogApi>(
    client: &C,
    token: &str,
    playlist_id: &str,
) -> Result<Playlist> {
    let response = client.fetch_playlist(token, playlist_id).await?;
    let mut playlist = Playlist::from_response(response);
    pull_remaining_tracks(client, token, &mut playlist).await?;
    Ok(playlist)
}

/// Follows the playlist's `next` cursor until the catalog reports no further page.
///
/// Each page is ingested into the playlist, which drops malformed items and
/// moves the cursor forward. Cursors are trusted to advance; no cycle
/// detection is done.
///
/// Returns the number of pages fetched.
pub async fn pull_remaining_tracks<C: CatalogApi>(
    client: &C,
    token: &str,
    playlist: &mut Playlist,
) -> Result<usize> {
    let mut pages = 0;
    while let Some(url) = playlist.next_url().map(str::to_owned) {
        let page = client.fetch_playlist_page(token, &url).await?;
        playlist.add_tracks(page);
        pages += 1;
    }
    Ok(pages)
}
