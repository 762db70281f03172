use super::*;

impl<'a> ListingRepo for DbReadOnly<'a> {
    fn create_listing(&self, _listing: &Listing) -> Result<()> {
        unreachable!();
    }
    fn update_listing(&self, _listing: &Listing) -> Result<()> {
        unreachable!();
    }
    fn update_listing_if_revision(&self, _expected: Revision, _listing: &Listing) -> Result<()> {
        unreachable!();
    }
    fn set_listing_status(
        &self,
        _id: &str,
        _status: ModerationStatus,
        _comment: Option<&str>,
        _at: Timestamp,
    ) -> Result<()> {
        unreachable!();
    }

    fn get_listing(&self, id: &str) -> Result<Listing> {
        get_listing(&mut self.conn.borrow_mut(), id)
    }
    fn all_listings(&self) -> Result<Vec<Listing>> {
        all_listings(&mut self.conn.borrow_mut())
    }
    fn listings_with_status(
        &self,
        status: ModerationStatus,
        pagination: &Pagination,
    ) -> Result<Vec<Listing>> {
        listings_with_status(&mut self.conn.borrow_mut(), status, pagination)
    }
    fn count_listings_with_status(&self, status: ModerationStatus) -> Result<u64> {
        count_listings_with_status(&mut self.conn.borrow_mut(), status)
    }
}

impl<'a> ListingRepo for DbReadWrite<'a> {
    fn create_listing(&self, listing: &Listing) -> Result<()> {
        create_listing(&mut self.conn.borrow_mut(), listing)
    }
    fn update_listing(&self, listing: &Listing) -> Result<()> {
        update_listing(&mut self.conn.borrow_mut(), listing)
    }
    fn update_listing_if_revision(&self, expected: Revision, listing: &Listing) -> Result<()> {
        update_listing_if_revision(&mut self.conn.borrow_mut(), expected, listing)
    }
    fn set_listing_status(
        &self,
        id: &str,
        status: ModerationStatus,
        comment: Option<&str>,
        at: Timestamp,
    ) -> Result<()> {
        set_listing_status(&mut self.conn.borrow_mut(), id, status, comment, at)
    }

    fn get_listing(&self, id: &str) -> Result<Listing> {
        get_listing(&mut self.conn.borrow_mut(), id)
    }
    fn all_listings(&self) -> Result<Vec<Listing>> {
        all_listings(&mut self.conn.borrow_mut())
    }
    fn listings_with_status(
        &self,
        status: ModerationStatus,
        pagination: &Pagination,
    ) -> Result<Vec<Listing>> {
        listings_with_status(&mut self.conn.borrow_mut(), status, pagination)
    }
    fn count_listings_with_status(&self, status: ModerationStatus) -> Result<u64> {
        count_listings_with_status(&mut self.conn.borrow_mut(), status)
    }
}

fn load_listing(entity: models::ListingEntity) -> Result<Listing> {
    let models::ListingEntity {
        rowid: _,
        id,
        created_at,
        updated_at,
        created_by,
        rev,
        status,
        name,
        name_zh,
        name_pt,
        description,
        description_zh,
        description_pt,
        address,
        address_zh,
        address_pt,
        cuisines,
        cuisines_zh,
        cuisines_pt,
        pet_policy,
        contact_info,
        extra_info,
        // Redundant cover column, the gallery already starts with it.
        image_url: _,
        gallery,
        menu_images,
        opening_hours,
        website,
        facebook,
        instagram,
        admin_comment,
    } = entity;
    let opening_hours = opening_hours
        .map(|hours| {
            hours
                .parse::<WeeklyHours>()
                .map_err(|err| anyhow!("Stored opening hours are unreadable: {err}"))
        })
        .transpose()?;
    Ok(Listing {
        id: id.into(),
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
        created_by: created_by.map(Into::into),
        revision: Revision::from(rev as u64),
        status: load_moderation_status(status)?,
        name: LocalizedText {
            canonical: name,
            zh: name_zh,
            pt: name_pt,
        },
        description: LocalizedText {
            canonical: description,
            zh: description_zh,
            pt: description_pt,
        },
        address: LocalizedText {
            canonical: address,
            zh: address_zh,
            pt: address_pt,
        },
        cuisines: LocalizedList {
            canonical: util::decode_string_list(&cuisines)?,
            zh: util::decode_string_list(&cuisines_zh)?,
            pt: util::decode_string_list(&cuisines_pt)?,
        },
        pet_policy,
        contact_info,
        extra_info,
        gallery: Gallery::from(util::decode_string_list(&gallery)?),
        menu_images: util::decode_string_list(&menu_images)?,
        opening_hours,
        links: SocialLinks {
            website,
            facebook,
            instagram,
        },
        admin_comment,
    })
}

fn into_new_listing(listing: &Listing) -> Result<models::NewListing<'_>> {
    Ok(models::NewListing {
        id: listing.id.as_str(),
        created_at: listing.created_at.as_millis(),
        updated_at: listing.updated_at.as_millis(),
        created_by: listing.created_by.as_ref().map(Id::as_str),
        rev: u64::from(listing.revision) as i64,
        status: i16::from(listing.status),
        name: &listing.name.canonical,
        name_zh: listing.name.zh.as_deref(),
        name_pt: listing.name.pt.as_deref(),
        description: &listing.description.canonical,
        description_zh: listing.description.zh.as_deref(),
        description_pt: listing.description.pt.as_deref(),
        address: &listing.address.canonical,
        address_zh: listing.address.zh.as_deref(),
        address_pt: listing.address.pt.as_deref(),
        cuisines: util::encode_string_list(&listing.cuisines.canonical)?,
        cuisines_zh: util::encode_string_list(&listing.cuisines.zh)?,
        cuisines_pt: util::encode_string_list(&listing.cuisines.pt)?,
        pet_policy: listing.pet_policy.as_deref(),
        contact_info: listing.contact_info.as_deref(),
        extra_info: listing.extra_info.as_deref(),
        image_url: listing.gallery.cover(),
        gallery: util::encode_string_list(listing.gallery.urls())?,
        menu_images: util::encode_string_list(&listing.menu_images)?,
        opening_hours: listing.opening_hours.map(|hours| hours.to_string()),
        website: listing.links.website.as_deref(),
        facebook: listing.links.facebook.as_deref(),
        instagram: listing.links.instagram.as_deref(),
        admin_comment: listing.admin_comment.as_deref(),
    })
}

fn create_listing(conn: &mut SqliteConnection, listing: &Listing) -> Result<()> {
    let new_listing = into_new_listing(listing)?;
    diesel::insert_into(schema::listings::table)
        .values(&new_listing)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_listing(conn: &mut SqliteConnection, id: &str) -> Result<Listing> {
    use schema::listings::dsl;
    let entity = dsl::listings
        .filter(dsl::id.eq(id))
        .first::<models::ListingEntity>(conn)
        .map_err(from_diesel_err)?;
    load_listing(entity)
}

fn all_listings(conn: &mut SqliteConnection) -> Result<Vec<Listing>> {
    use schema::listings::dsl;
    dsl::listings
        .order_by(dsl::rowid.asc())
        .load::<models::ListingEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_listing)
        .collect()
}

fn listings_with_status(
    conn: &mut SqliteConnection,
    status: ModerationStatus,
    pagination: &Pagination,
) -> Result<Vec<Listing>> {
    use schema::listings::dsl;
    let mut query = dsl::listings
        .filter(dsl::status.eq(i16::from(status)))
        .order_by(dsl::rowid.asc())
        .into_boxed();
    let (limit, offset) = sql_pagination(pagination);
    if let Some(limit) = limit {
        query = query.limit(limit);
        if offset > 0 {
            query = query.offset(offset);
        }
    }
    query
        .load::<models::ListingEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_listing)
        .collect()
}

fn count_listings_with_status(conn: &mut SqliteConnection, status: ModerationStatus) -> Result<u64> {
    use schema::listings::dsl;
    Ok(dsl::listings
        .filter(dsl::status.eq(i16::from(status)))
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as u64)
}

fn listing_exists(conn: &mut SqliteConnection, id: &str) -> Result<bool> {
    use schema::listings::dsl;
    let count = dsl::listings
        .filter(dsl::id.eq(id))
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count > 0)
}

fn update_listing(conn: &mut SqliteConnection, listing: &Listing) -> Result<()> {
    use schema::listings::dsl;
    let new_listing = into_new_listing(listing)?;
    let count = diesel::update(dsl::listings.filter(dsl::id.eq(listing.id.as_str())))
        .set(&new_listing)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn update_listing_if_revision(
    conn: &mut SqliteConnection,
    expected: Revision,
    listing: &Listing,
) -> Result<()> {
    use schema::listings::dsl;
    let new_listing = into_new_listing(listing)?;
    let count = diesel::update(
        dsl::listings
            .filter(dsl::id.eq(listing.id.as_str()))
            .filter(dsl::rev.eq(u64::from(expected) as i64)),
    )
    .set(&new_listing)
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        // Distinguish a stale revision from a missing row.
        return Err(if listing_exists(conn, listing.id.as_str())? {
            repo::Error::InvalidVersion
        } else {
            repo::Error::NotFound
        });
    }
    Ok(())
}

fn set_listing_status(
    conn: &mut SqliteConnection,
    id: &str,
    status: ModerationStatus,
    comment: Option<&str>,
    at: Timestamp,
) -> Result<()> {
    use schema::listings::dsl;
    let count = diesel::update(dsl::listings.filter(dsl::id.eq(id)))
        .set((
            dsl::status.eq(i16::from(status)),
            dsl::admin_comment.eq(comment),
            dsl::updated_at.eq(at.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
