use crate::models::{Album, Media, DEFAULT_COVER};
use crate::store::Collection;
use crate::utils::error::AppResult;

use super::{keys, Database};

/// Repository för album och deras mediapartitioner.
///
/// Mediaposter lagras inte i någon global collection utan i en egen
/// store-nyckel per album (`media_<albumId>`). Aggregatfälten
/// `item_count` och `cover_url` räknas om här vid varje mutation;
/// ingen annan kod får skriva dem.
pub struct AlbumRepository {
    coll: Collection<Album>,
    db: Database,
}

impl AlbumRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            coll: db.collection(keys::ALBUMS),
            db: db.clone(),
        }
    }

    pub fn find_all(&self) -> AppResult<Vec<Album>> {
        self.coll.load().map_err(Into::into)
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Option<Album>> {
        super::find_record(&self.coll, id)
    }

    pub fn find_by_trip(&self, trip_id: &str) -> AppResult<Vec<Album>> {
        Ok(self
            .coll
            .load()?
            .into_iter()
            .filter(|a| a.trip_id == trip_id)
            .collect())
    }

    pub fn create(&self, album: &mut Album) -> AppResult<String> {
        super::create_record(&self.coll, album)
    }

    pub fn update(&self, album: &mut Album) -> AppResult<()> {
        super::update_record(&self.coll, album)
    }

    /// Ta bort ett album tillsammans med dess mediapartition,
    /// annars blir partitionsnyckeln föräldralös i lagret
    pub fn delete(&self, id: &str) -> AppResult<()> {
        super::delete_record(&self.coll, id)?;
        self.media_collection(id).drop_all()?;
        Ok(())
    }

    /// Partitionshandtag för ett albums media
    fn media_collection(&self, album_id: &str) -> Collection<Media> {
        self.db.collection(keys::media_for(album_id))
    }

    pub fn find_media(&self, album_id: &str) -> AppResult<Vec<Media>> {
        self.media_collection(album_id).load().map_err(Into::into)
    }

    /// Lägg till en mediapost och räkna om albumets aggregat.
    ///
    /// Posten skrivs till partitionen innan aggregaten räknas om; slår
    /// omräkningens skrivning fel (t.ex. kvot) kan `item_count` tillfälligt
    /// släpa efter partitionen tills nästa mutation eller doctor-körning
    /// räknar om den. Felet rapporteras alltid till anroparen.
    pub fn add_media(&self, media: &mut Media) -> AppResult<String> {
        let album_id = media.album_id.clone();
        let coll = self.media_collection(&album_id);
        let id = super::create_record(&coll, media)?;
        self.refresh_aggregates(&album_id)?;
        tracing::info!(album = %album_id, media = %id, "La till media i album");
        Ok(id)
    }

    /// Ta bort en mediapost och räkna om albumets aggregat.
    /// Pekade omslaget på den borttagna posten flyttas det till
    /// första kvarvarande foto, annars till platshållaren.
    pub fn delete_media(&self, album_id: &str, media_id: &str) -> AppResult<()> {
        let coll = self.media_collection(album_id);
        super::delete_record(&coll, media_id)?;
        self.refresh_aggregates(album_id)?;
        Ok(())
    }

    /// Räkna om `item_count` och `cover_url` från mediapartitionen.
    /// Saknas albumet (t.ex. borttaget i en annan flik) loggas det
    /// bara; media utan album är inte ett fel här.
    pub fn refresh_aggregates(&self, album_id: &str) -> AppResult<()> {
        let media = self.find_media(album_id)?;

        let mut albums = self.coll.load()?;
        let Some(album) = albums
            .iter_mut()
            .find(|a| a.id.as_deref() == Some(album_id))
        else {
            tracing::warn!(album = %album_id, "Aggregat kan inte uppdateras, albumet saknas");
            return Ok(());
        };

        album.item_count = media.len() as u32;

        let cover_still_valid = media.iter().any(|m| m.url == album.cover_url);
        if !cover_still_valid {
            album.cover_url = media
                .iter()
                .find(|m| m.is_photo())
                .map(|m| m.url.clone())
                .unwrap_or_else(|| DEFAULT_COVER.to_string());
        }

        self.coll.save(&albums)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaType;

    fn setup() -> (Database, String) {
        let db = Database::open_in_memory();
        let mut album = Album::new("trip-1".into(), "Tokyo".into());
        let id = db.albums().create(&mut album).unwrap();
        (db, id)
    }

    fn photo(album_id: &str, url: &str) -> Media {
        Media::new(album_id.into(), MediaType::Photo, url.into(), url.into())
    }

    #[test]
    fn test_item_count_follows_partition() {
        let (db, album_id) = setup();
        let repo = db.albums();

        let id1 = repo.add_media(&mut photo(&album_id, "data:1")).unwrap();
        let id2 = repo.add_media(&mut photo(&album_id, "data:2")).unwrap();
        assert_eq!(repo.find_by_id(&album_id).unwrap().unwrap().item_count, 2);

        repo.delete_media(&album_id, &id1).unwrap();
        assert_eq!(repo.find_by_id(&album_id).unwrap().unwrap().item_count, 1);

        repo.delete_media(&album_id, &id2).unwrap();
        let album = repo.find_by_id(&album_id).unwrap().unwrap();
        assert_eq!(album.item_count, 0);
        assert_eq!(album.cover_url, DEFAULT_COVER);
    }

    #[test]
    fn test_first_photo_becomes_cover() {
        let (db, album_id) = setup();
        let repo = db.albums();

        repo.add_media(&mut photo(&album_id, "data:first")).unwrap();
        repo.add_media(&mut photo(&album_id, "data:second")).unwrap();

        let album = repo.find_by_id(&album_id).unwrap().unwrap();
        assert_eq!(album.cover_url, "data:first");
    }

    #[test]
    fn test_cover_reassigned_on_cover_delete() {
        let (db, album_id) = setup();
        let repo = db.albums();

        let cover_id = repo.add_media(&mut photo(&album_id, "data:first")).unwrap();
        repo.add_media(&mut photo(&album_id, "data:second")).unwrap();

        repo.delete_media(&album_id, &cover_id).unwrap();

        let album = repo.find_by_id(&album_id).unwrap().unwrap();
        assert_eq!(album.cover_url, "data:second");
    }

    #[test]
    fn test_video_never_becomes_cover() {
        let (db, album_id) = setup();
        let repo = db.albums();

        let mut video = Media::new(
            album_id.clone(),
            MediaType::Video,
            "data:video".into(),
            "assets/video-placeholder.png".into(),
        );
        repo.add_media(&mut video).unwrap();

        let album = repo.find_by_id(&album_id).unwrap().unwrap();
        assert_eq!(album.item_count, 1);
        assert_eq!(album.cover_url, DEFAULT_COVER);
    }

    #[test]
    fn test_delete_album_drops_partition() {
        let (db, album_id) = setup();
        let repo = db.albums();

        repo.add_media(&mut photo(&album_id, "data:1")).unwrap();
        repo.delete(&album_id).unwrap();

        assert!(repo.find_media(&album_id).unwrap().is_empty());
    }

    #[test]
    fn test_media_partitions_are_independent() {
        let (db, album_a) = setup();
        let repo = db.albums();

        let mut other = Album::new("trip-1".into(), "Kyoto".into());
        let album_b = repo.create(&mut other).unwrap();

        repo.add_media(&mut photo(&album_a, "data:a")).unwrap();
        repo.add_media(&mut photo(&album_b, "data:b")).unwrap();

        assert_eq!(repo.find_media(&album_a).unwrap().len(), 1);
        assert_eq!(repo.find_media(&album_b).unwrap().len(), 1);
        assert_eq!(repo.find_by_id(&album_a).unwrap().unwrap().item_count, 1);
    }
}
