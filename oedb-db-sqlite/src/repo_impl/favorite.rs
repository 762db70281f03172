use super::*;

impl<'a> FavoriteRepo for DbReadOnly<'a> {
    fn add_favorite(&self, _favorite: &Favorite) -> Result<()> {
        unreachable!();
    }
    fn remove_favorite(&self, _user_id: &str, _listing_id: &str) -> Result<()> {
        unreachable!();
    }

    fn favorites_of_user(&self, user_id: &str) -> Result<Vec<Favorite>> {
        favorites_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> FavoriteRepo for DbReadWrite<'a> {
    fn add_favorite(&self, favorite: &Favorite) -> Result<()> {
        add_favorite(&mut self.conn.borrow_mut(), favorite)
    }
    fn remove_favorite(&self, user_id: &str, listing_id: &str) -> Result<()> {
        remove_favorite(&mut self.conn.borrow_mut(), user_id, listing_id)
    }

    fn favorites_of_user(&self, user_id: &str) -> Result<Vec<Favorite>> {
        favorites_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

fn add_favorite(conn: &mut SqliteConnection, favorite: &Favorite) -> Result<()> {
    let new_favorite = models::NewFavorite {
        user_id: favorite.user_id.as_str(),
        listing_id: favorite.listing_id.as_str(),
        created_at: favorite.created_at.as_millis(),
    };
    diesel::insert_into(schema::favorites::table)
        .values(&new_favorite)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn remove_favorite(conn: &mut SqliteConnection, user_id: &str, listing_id: &str) -> Result<()> {
    use schema::favorites::dsl;
    let count = diesel::delete(
        dsl::favorites
            .filter(dsl::user_id.eq(user_id))
            .filter(dsl::listing_id.eq(listing_id)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn favorites_of_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Favorite>> {
    use schema::favorites::dsl;
    Ok(dsl::favorites
        .filter(dsl::user_id.eq(user_id))
        .order_by(dsl::created_at.asc())
        .load::<models::FavoriteEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::FavoriteEntity {
                 user_id,
                 listing_id,
                 created_at,
             }| Favorite {
                user_id: user_id.into(),
                listing_id: listing_id.into(),
                created_at: Timestamp::from_millis(created_at),
            },
        )
        .collect())
}
