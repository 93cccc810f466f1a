pub use root::*;

const _: () = ::planus::check_version_compatibility("planus-1.1.1");

/// The root namespace
///
/// Generated from these locations:
/// * File `/src/nestbuf/proto_defs/user_format/user.fbs`
#[no_implicit_prelude]
#[allow(dead_code, clippy::needless_lifetimes)]
mod root {
    /// The table `Link`
    ///
    /// Generated from these locations:
    /// * Table `Link` in the file `/src/nestbuf/proto_defs/user_format/user.fbs:1`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct Link {
        /// The field `platform` in the table `Link`
        pub platform: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `url` in the table `Link`
        pub url: ::core::option::Option<::planus::alloc::string::String>,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for Link {
        fn default() -> Self {
            Self {
                platform: ::core::default::Default::default(),
                url: ::core::default::Default::default(),
            }
        }
    }

    impl Link {
        /// Creates a [LinkBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> LinkBuilder<()> {
            LinkBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_platform: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
            field_url: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
        ) -> ::planus::Offset<Self> {
            let prepared_platform = field_platform.prepare(builder);
            let prepared_url = field_url.prepare(builder);

            let mut table_writer: ::planus::table_writer::TableWriter<8> =
                ::core::default::Default::default();
            if prepared_platform.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(0);
            }
            if prepared_url.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(1);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_platform) = prepared_platform {
                        object_writer.write::<_, _, 4>(&prepared_platform);
                    }
                    if let ::core::option::Option::Some(prepared_url) = prepared_url {
                        object_writer.write::<_, _, 4>(&prepared_url);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<Link>> for Link {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Link> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<Link>> for Link {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<Link>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<Link> for Link {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Link> {
            Link::create(builder, &self.platform, &self.url)
        }
    }

    /// Builder for serializing an instance of the [Link] type.
    ///
    /// Can be created using the [Link::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct LinkBuilder<State>(State);

    impl LinkBuilder<()> {
        /// Setter for the [`platform` field](Link#structfield.platform).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn platform<T0>(self, value: T0) -> LinkBuilder<(T0,)>
        where
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            LinkBuilder((value,))
        }

        /// Sets the [`platform` field](Link#structfield.platform) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn platform_as_null(self) -> LinkBuilder<((),)> {
            self.platform(())
        }
    }

    impl<T0> LinkBuilder<(T0,)> {
        /// Setter for the [`url` field](Link#structfield.url).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn url<T1>(self, value: T1) -> LinkBuilder<(T0, T1)>
        where
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            let (v0,) = self.0;
            LinkBuilder((v0, value))
        }

        /// Sets the [`url` field](Link#structfield.url) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn url_as_null(self) -> LinkBuilder<(T0, ())> {
            self.url(())
        }
    }

    impl<T0, T1> LinkBuilder<(T0, T1)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [Link].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<Link>
        where
            Self: ::planus::WriteAsOffset<Link>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
        > ::planus::WriteAs<::planus::Offset<Link>> for LinkBuilder<(T0, T1)>
    {
        type Prepared = ::planus::Offset<Link>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Link> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
        > ::planus::WriteAsOptional<::planus::Offset<Link>> for LinkBuilder<(T0, T1)>
    {
        type Prepared = ::planus::Offset<Link>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<Link>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
        > ::planus::WriteAsOffset<Link> for LinkBuilder<(T0, T1)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Link> {
            let (v0, v1) = &self.0;
            Link::create(builder, v0, v1)
        }
    }

    /// Reference to a deserialized [Link].
    #[derive(Copy, Clone)]
    pub struct LinkRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> LinkRef<'a> {
        /// Getter for the [`platform` field](Link#structfield.platform).
        #[inline]
        pub fn platform(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(0, "Link", "platform")
        }

        /// Getter for the [`url` field](Link#structfield.url).
        #[inline]
        pub fn url(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(1, "Link", "url")
        }
    }

    impl<'a> ::core::fmt::Debug for LinkRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("LinkRef");
            if let ::core::option::Option::Some(field_platform) = self.platform().transpose() {
                f.field("platform", &field_platform);
            }
            if let ::core::option::Option::Some(field_url) = self.url().transpose() {
                f.field("url", &field_url);
            }
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<LinkRef<'a>> for Link {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: LinkRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                platform: if let ::core::option::Option::Some(platform) = value.platform()? {
                    ::core::option::Option::Some(::core::convert::Into::into(platform))
                } else {
                    ::core::option::Option::None
                },
                url: if let ::core::option::Option::Some(url) = value.url()? {
                    ::core::option::Option::Some(::core::convert::Into::into(url))
                } else {
                    ::core::option::Option::None
                },
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for LinkRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for LinkRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[LinkRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<Link>> for Link {
        type Value = ::planus::Offset<Link>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<Link>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for LinkRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| {
                error_kind.with_error_location("[LinkRef]", "read_as_root", 0)
            })
        }
    }

    /// The table `PrivacySettings`
    ///
    /// Generated from these locations:
    /// * Table `PrivacySettings` in the file `/src/nestbuf/proto_defs/user_format/user.fbs:6`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct PrivacySettings {
        /// The field `profile_public` in the table `PrivacySettings`
        pub profile_public: bool,
        /// The field `email_visible` in the table `PrivacySettings`
        pub email_visible: bool,
        /// The field `show_activity` in the table `PrivacySettings`
        pub show_activity: bool,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for PrivacySettings {
        fn default() -> Self {
            Self {
                profile_public: false,
                email_visible: false,
                show_activity: false,
            }
        }
    }

    impl PrivacySettings {
        /// Creates a [PrivacySettingsBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> PrivacySettingsBuilder<()> {
            PrivacySettingsBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_profile_public: impl ::planus::WriteAsDefault<bool, bool>,
            field_email_visible: impl ::planus::WriteAsDefault<bool, bool>,
            field_show_activity: impl ::planus::WriteAsDefault<bool, bool>,
        ) -> ::planus::Offset<Self> {
            let prepared_profile_public = field_profile_public.prepare(builder, &false);
            let prepared_email_visible = field_email_visible.prepare(builder, &false);
            let prepared_show_activity = field_show_activity.prepare(builder, &false);

            let mut table_writer: ::planus::table_writer::TableWriter<10> =
                ::core::default::Default::default();
            if prepared_profile_public.is_some() {
                table_writer.write_entry::<bool>(0);
            }
            if prepared_email_visible.is_some() {
                table_writer.write_entry::<bool>(1);
            }
            if prepared_show_activity.is_some() {
                table_writer.write_entry::<bool>(2);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_profile_public) = prepared_profile_public {
                        object_writer.write::<_, _, 1>(&prepared_profile_public);
                    }
                    if let ::core::option::Option::Some(prepared_email_visible) = prepared_email_visible {
                        object_writer.write::<_, _, 1>(&prepared_email_visible);
                    }
                    if let ::core::option::Option::Some(prepared_show_activity) = prepared_show_activity {
                        object_writer.write::<_, _, 1>(&prepared_show_activity);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<PrivacySettings>> for PrivacySettings {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<PrivacySettings> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<PrivacySettings>> for PrivacySettings {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<PrivacySettings>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<PrivacySettings> for PrivacySettings {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<PrivacySettings> {
            PrivacySettings::create(builder, self.profile_public, self.email_visible, self.show_activity)
        }
    }

    /// Builder for serializing an instance of the [PrivacySettings] type.
    ///
    /// Can be created using the [PrivacySettings::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct PrivacySettingsBuilder<State>(State);

    impl PrivacySettingsBuilder<()> {
        /// Setter for the [`profile_public` field](PrivacySettings#structfield.profile_public).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn profile_public<T0>(self, value: T0) -> PrivacySettingsBuilder<(T0,)>
        where
            T0: ::planus::WriteAsDefault<bool, bool>,
        {
            PrivacySettingsBuilder((value,))
        }

        /// Sets the [`profile_public` field](PrivacySettings#structfield.profile_public) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn profile_public_as_default(self) -> PrivacySettingsBuilder<(::planus::DefaultValue,)> {
            self.profile_public(::planus::DefaultValue)
        }
    }

    impl<T0> PrivacySettingsBuilder<(T0,)> {
        /// Setter for the [`email_visible` field](PrivacySettings#structfield.email_visible).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn email_visible<T1>(self, value: T1) -> PrivacySettingsBuilder<(T0, T1)>
        where
            T1: ::planus::WriteAsDefault<bool, bool>,
        {
            let (v0,) = self.0;
            PrivacySettingsBuilder((v0, value))
        }

        /// Sets the [`email_visible` field](PrivacySettings#structfield.email_visible) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn email_visible_as_default(self) -> PrivacySettingsBuilder<(T0, ::planus::DefaultValue)> {
            self.email_visible(::planus::DefaultValue)
        }
    }

    impl<T0, T1> PrivacySettingsBuilder<(T0, T1)> {
        /// Setter for the [`show_activity` field](PrivacySettings#structfield.show_activity).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn show_activity<T2>(self, value: T2) -> PrivacySettingsBuilder<(T0, T1, T2)>
        where
            T2: ::planus::WriteAsDefault<bool, bool>,
        {
            let (v0, v1) = self.0;
            PrivacySettingsBuilder((v0, v1, value))
        }

        /// Sets the [`show_activity` field](PrivacySettings#structfield.show_activity) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn show_activity_as_default(self) -> PrivacySettingsBuilder<(T0, T1, ::planus::DefaultValue)> {
            self.show_activity(::planus::DefaultValue)
        }
    }

    impl<T0, T1, T2> PrivacySettingsBuilder<(T0, T1, T2)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [PrivacySettings].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<PrivacySettings>
        where
            Self: ::planus::WriteAsOffset<PrivacySettings>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<bool, bool>,
            T1: ::planus::WriteAsDefault<bool, bool>,
            T2: ::planus::WriteAsDefault<bool, bool>,
        > ::planus::WriteAs<::planus::Offset<PrivacySettings>> for PrivacySettingsBuilder<(T0, T1, T2)>
    {
        type Prepared = ::planus::Offset<PrivacySettings>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<PrivacySettings> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<bool, bool>,
            T1: ::planus::WriteAsDefault<bool, bool>,
            T2: ::planus::WriteAsDefault<bool, bool>,
        > ::planus::WriteAsOptional<::planus::Offset<PrivacySettings>> for PrivacySettingsBuilder<(T0, T1, T2)>
    {
        type Prepared = ::planus::Offset<PrivacySettings>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<PrivacySettings>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<bool, bool>,
            T1: ::planus::WriteAsDefault<bool, bool>,
            T2: ::planus::WriteAsDefault<bool, bool>,
        > ::planus::WriteAsOffset<PrivacySettings> for PrivacySettingsBuilder<(T0, T1, T2)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<PrivacySettings> {
            let (v0, v1, v2) = &self.0;
            PrivacySettings::create(builder, v0, v1, v2)
        }
    }

    /// Reference to a deserialized [PrivacySettings].
    #[derive(Copy, Clone)]
    pub struct PrivacySettingsRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> PrivacySettingsRef<'a> {
        /// Getter for the [`profile_public` field](PrivacySettings#structfield.profile_public).
        #[inline]
        pub fn profile_public(&self) -> ::planus::Result<bool> {
            ::core::result::Result::Ok(
                self.0
                    .access(0, "PrivacySettings", "profile_public")?
                    .unwrap_or(false),
            )
        }

        /// Getter for the [`email_visible` field](PrivacySettings#structfield.email_visible).
        #[inline]
        pub fn email_visible(&self) -> ::planus::Result<bool> {
            ::core::result::Result::Ok(
                self.0
                    .access(1, "PrivacySettings", "email_visible")?
                    .unwrap_or(false),
            )
        }

        /// Getter for the [`show_activity` field](PrivacySettings#structfield.show_activity).
        #[inline]
        pub fn show_activity(&self) -> ::planus::Result<bool> {
            ::core::result::Result::Ok(
                self.0
                    .access(2, "PrivacySettings", "show_activity")?
                    .unwrap_or(false),
            )
        }
    }

    impl<'a> ::core::fmt::Debug for PrivacySettingsRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("PrivacySettingsRef");
            f.field("profile_public", &self.profile_public());
            f.field("email_visible", &self.email_visible());
            f.field("show_activity", &self.show_activity());
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<PrivacySettingsRef<'a>> for PrivacySettings {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: PrivacySettingsRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                profile_public: ::core::convert::TryInto::try_into(value.profile_public()?)?,
                email_visible: ::core::convert::TryInto::try_into(value.email_visible()?)?,
                show_activity: ::core::convert::TryInto::try_into(value.show_activity()?)?,
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for PrivacySettingsRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for PrivacySettingsRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[PrivacySettingsRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<PrivacySettings>> for PrivacySettings {
        type Value = ::planus::Offset<PrivacySettings>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<PrivacySettings>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for PrivacySettingsRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| {
                error_kind.with_error_location("[PrivacySettingsRef]", "read_as_root", 0)
            })
        }
    }

    /// The table `NotificationSetting`
    ///
    /// Generated from these locations:
    /// * Table `NotificationSetting` in the file `/src/nestbuf/proto_defs/user_format/user.fbs:12`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct NotificationSetting {
        /// The field `key` in the table `NotificationSetting`
        pub key: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `value` in the table `NotificationSetting`
        pub value: bool,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for NotificationSetting {
        fn default() -> Self {
            Self {
                key: ::core::default::Default::default(),
                value: false,
            }
        }
    }

    impl NotificationSetting {
        /// Creates a [NotificationSettingBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> NotificationSettingBuilder<()> {
            NotificationSettingBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_key: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
            field_value: impl ::planus::WriteAsDefault<bool, bool>,
        ) -> ::planus::Offset<Self> {
            let prepared_key = field_key.prepare(builder);
            let prepared_value = field_value.prepare(builder, &false);

            let mut table_writer: ::planus::table_writer::TableWriter<8> =
                ::core::default::Default::default();
            if prepared_key.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(0);
            }
            if prepared_value.is_some() {
                table_writer.write_entry::<bool>(1);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_key) = prepared_key {
                        object_writer.write::<_, _, 4>(&prepared_key);
                    }
                    if let ::core::option::Option::Some(prepared_value) = prepared_value {
                        object_writer.write::<_, _, 1>(&prepared_value);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<NotificationSetting>> for NotificationSetting {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<NotificationSetting> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<NotificationSetting>> for NotificationSetting {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<NotificationSetting>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<NotificationSetting> for NotificationSetting {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<NotificationSetting> {
            NotificationSetting::create(builder, &self.key, self.value)
        }
    }

    /// Builder for serializing an instance of the [NotificationSetting] type.
    ///
    /// Can be created using the [NotificationSetting::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct NotificationSettingBuilder<State>(State);

    impl NotificationSettingBuilder<()> {
        /// Setter for the [`key` field](NotificationSetting#structfield.key).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn key<T0>(self, value: T0) -> NotificationSettingBuilder<(T0,)>
        where
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            NotificationSettingBuilder((value,))
        }

        /// Sets the [`key` field](NotificationSetting#structfield.key) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn key_as_null(self) -> NotificationSettingBuilder<((),)> {
            self.key(())
        }
    }

    impl<T0> NotificationSettingBuilder<(T0,)> {
        /// Setter for the [`value` field](NotificationSetting#structfield.value).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn value<T1>(self, value: T1) -> NotificationSettingBuilder<(T0, T1)>
        where
            T1: ::planus::WriteAsDefault<bool, bool>,
        {
            let (v0,) = self.0;
            NotificationSettingBuilder((v0, value))
        }

        /// Sets the [`value` field](NotificationSetting#structfield.value) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn value_as_default(self) -> NotificationSettingBuilder<(T0, ::planus::DefaultValue)> {
            self.value(::planus::DefaultValue)
        }
    }

    impl<T0, T1> NotificationSettingBuilder<(T0, T1)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [NotificationSetting].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<NotificationSetting>
        where
            Self: ::planus::WriteAsOffset<NotificationSetting>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsDefault<bool, bool>,
        > ::planus::WriteAs<::planus::Offset<NotificationSetting>> for NotificationSettingBuilder<(T0, T1)>
    {
        type Prepared = ::planus::Offset<NotificationSetting>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<NotificationSetting> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsDefault<bool, bool>,
        > ::planus::WriteAsOptional<::planus::Offset<NotificationSetting>> for NotificationSettingBuilder<(T0, T1)>
    {
        type Prepared = ::planus::Offset<NotificationSetting>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<NotificationSetting>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsDefault<bool, bool>,
        > ::planus::WriteAsOffset<NotificationSetting> for NotificationSettingBuilder<(T0, T1)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<NotificationSetting> {
            let (v0, v1) = &self.0;
            NotificationSetting::create(builder, v0, v1)
        }
    }

    /// Reference to a deserialized [NotificationSetting].
    #[derive(Copy, Clone)]
    pub struct NotificationSettingRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> NotificationSettingRef<'a> {
        /// Getter for the [`key` field](NotificationSetting#structfield.key).
        #[inline]
        pub fn key(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(0, "NotificationSetting", "key")
        }

        /// Getter for the [`value` field](NotificationSetting#structfield.value).
        #[inline]
        pub fn value(&self) -> ::planus::Result<bool> {
            ::core::result::Result::Ok(
                self.0
                    .access(1, "NotificationSetting", "value")?
                    .unwrap_or(false),
            )
        }
    }

    impl<'a> ::core::fmt::Debug for NotificationSettingRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("NotificationSettingRef");
            if let ::core::option::Option::Some(field_key) = self.key().transpose() {
                f.field("key", &field_key);
            }
            f.field("value", &self.value());
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<NotificationSettingRef<'a>> for NotificationSetting {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: NotificationSettingRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                key: if let ::core::option::Option::Some(key) = value.key()? {
                    ::core::option::Option::Some(::core::convert::Into::into(key))
                } else {
                    ::core::option::Option::None
                },
                value: ::core::convert::TryInto::try_into(value.value()?)?,
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for NotificationSettingRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for NotificationSettingRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[NotificationSettingRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<NotificationSetting>> for NotificationSetting {
        type Value = ::planus::Offset<NotificationSetting>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<NotificationSetting>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for NotificationSettingRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| {
                error_kind.with_error_location("[NotificationSettingRef]", "read_as_root", 0)
            })
        }
    }

    /// The table `Preferences`
    ///
    /// Generated from these locations:
    /// * Table `Preferences` in the file `/src/nestbuf/proto_defs/user_format/user.fbs:17`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct Preferences {
        /// The field `theme` in the table `Preferences`
        pub theme: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `language` in the table `Preferences`
        pub language: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `notifications` in the table `Preferences`
        pub notifications: ::core::option::Option<::planus::alloc::vec::Vec<self::NotificationSetting>>,
        /// The field `privacy` in the table `Preferences`
        pub privacy: ::core::option::Option<::planus::alloc::boxed::Box<self::PrivacySettings>>,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for Preferences {
        fn default() -> Self {
            Self {
                theme: ::core::default::Default::default(),
                language: ::core::default::Default::default(),
                notifications: ::core::default::Default::default(),
                privacy: ::core::default::Default::default(),
            }
        }
    }

    impl Preferences {
        /// Creates a [PreferencesBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> PreferencesBuilder<()> {
            PreferencesBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_theme: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
            field_language: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
            field_notifications: impl ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::NotificationSetting>]>>,
            field_privacy: impl ::planus::WriteAsOptional<::planus::Offset<self::PrivacySettings>>,
        ) -> ::planus::Offset<Self> {
            let prepared_theme = field_theme.prepare(builder);
            let prepared_language = field_language.prepare(builder);
            let prepared_notifications = field_notifications.prepare(builder);
            let prepared_privacy = field_privacy.prepare(builder);

            let mut table_writer: ::planus::table_writer::TableWriter<12> =
                ::core::default::Default::default();
            if prepared_theme.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(0);
            }
            if prepared_language.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(1);
            }
            if prepared_notifications.is_some() {
                table_writer.write_entry::<::planus::Offset<[::planus::Offset<self::NotificationSetting>]>>(2);
            }
            if prepared_privacy.is_some() {
                table_writer.write_entry::<::planus::Offset<self::PrivacySettings>>(3);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_theme) = prepared_theme {
                        object_writer.write::<_, _, 4>(&prepared_theme);
                    }
                    if let ::core::option::Option::Some(prepared_language) = prepared_language {
                        object_writer.write::<_, _, 4>(&prepared_language);
                    }
                    if let ::core::option::Option::Some(prepared_notifications) = prepared_notifications {
                        object_writer.write::<_, _, 4>(&prepared_notifications);
                    }
                    if let ::core::option::Option::Some(prepared_privacy) = prepared_privacy {
                        object_writer.write::<_, _, 4>(&prepared_privacy);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<Preferences>> for Preferences {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Preferences> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<Preferences>> for Preferences {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<Preferences>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<Preferences> for Preferences {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Preferences> {
            Preferences::create(builder, &self.theme, &self.language, &self.notifications, &self.privacy)
        }
    }

    /// Builder for serializing an instance of the [Preferences] type.
    ///
    /// Can be created using the [Preferences::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct PreferencesBuilder<State>(State);

    impl PreferencesBuilder<()> {
        /// Setter for the [`theme` field](Preferences#structfield.theme).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn theme<T0>(self, value: T0) -> PreferencesBuilder<(T0,)>
        where
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            PreferencesBuilder((value,))
        }

        /// Sets the [`theme` field](Preferences#structfield.theme) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn theme_as_null(self) -> PreferencesBuilder<((),)> {
            self.theme(())
        }
    }

    impl<T0> PreferencesBuilder<(T0,)> {
        /// Setter for the [`language` field](Preferences#structfield.language).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn language<T1>(self, value: T1) -> PreferencesBuilder<(T0, T1)>
        where
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            let (v0,) = self.0;
            PreferencesBuilder((v0, value))
        }

        /// Sets the [`language` field](Preferences#structfield.language) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn language_as_null(self) -> PreferencesBuilder<(T0, ())> {
            self.language(())
        }
    }

    impl<T0, T1> PreferencesBuilder<(T0, T1)> {
        /// Setter for the [`notifications` field](Preferences#structfield.notifications).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn notifications<T2>(self, value: T2) -> PreferencesBuilder<(T0, T1, T2)>
        where
            T2: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::NotificationSetting>]>>,
        {
            let (v0, v1) = self.0;
            PreferencesBuilder((v0, v1, value))
        }

        /// Sets the [`notifications` field](Preferences#structfield.notifications) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn notifications_as_null(self) -> PreferencesBuilder<(T0, T1, ())> {
            self.notifications(())
        }
    }

    impl<T0, T1, T2> PreferencesBuilder<(T0, T1, T2)> {
        /// Setter for the [`privacy` field](Preferences#structfield.privacy).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn privacy<T3>(self, value: T3) -> PreferencesBuilder<(T0, T1, T2, T3)>
        where
            T3: ::planus::WriteAsOptional<::planus::Offset<self::PrivacySettings>>,
        {
            let (v0, v1, v2) = self.0;
            PreferencesBuilder((v0, v1, v2, value))
        }

        /// Sets the [`privacy` field](Preferences#structfield.privacy) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn privacy_as_null(self) -> PreferencesBuilder<(T0, T1, T2, ())> {
            self.privacy(())
        }
    }

    impl<T0, T1, T2, T3> PreferencesBuilder<(T0, T1, T2, T3)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [Preferences].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<Preferences>
        where
            Self: ::planus::WriteAsOffset<Preferences>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::NotificationSetting>]>>,
            T3: ::planus::WriteAsOptional<::planus::Offset<self::PrivacySettings>>,
        > ::planus::WriteAs<::planus::Offset<Preferences>> for PreferencesBuilder<(T0, T1, T2, T3)>
    {
        type Prepared = ::planus::Offset<Preferences>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Preferences> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::NotificationSetting>]>>,
            T3: ::planus::WriteAsOptional<::planus::Offset<self::PrivacySettings>>,
        > ::planus::WriteAsOptional<::planus::Offset<Preferences>> for PreferencesBuilder<(T0, T1, T2, T3)>
    {
        type Prepared = ::planus::Offset<Preferences>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<Preferences>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::NotificationSetting>]>>,
            T3: ::planus::WriteAsOptional<::planus::Offset<self::PrivacySettings>>,
        > ::planus::WriteAsOffset<Preferences> for PreferencesBuilder<(T0, T1, T2, T3)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Preferences> {
            let (v0, v1, v2, v3) = &self.0;
            Preferences::create(builder, v0, v1, v2, v3)
        }
    }

    /// Reference to a deserialized [Preferences].
    #[derive(Copy, Clone)]
    pub struct PreferencesRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> PreferencesRef<'a> {
        /// Getter for the [`theme` field](Preferences#structfield.theme).
        #[inline]
        pub fn theme(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(0, "Preferences", "theme")
        }

        /// Getter for the [`language` field](Preferences#structfield.language).
        #[inline]
        pub fn language(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(1, "Preferences", "language")
        }

        /// Getter for the [`notifications` field](Preferences#structfield.notifications).
        #[inline]
        pub fn notifications(&self) -> ::planus::Result<::core::option::Option<::planus::Vector<'a, ::planus::Result<self::NotificationSettingRef<'a>>>>> {
            self.0.access(2, "Preferences", "notifications")
        }

        /// Getter for the [`privacy` field](Preferences#structfield.privacy).
        #[inline]
        pub fn privacy(&self) -> ::planus::Result<::core::option::Option<self::PrivacySettingsRef<'a>>> {
            self.0.access(3, "Preferences", "privacy")
        }
    }

    impl<'a> ::core::fmt::Debug for PreferencesRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("PreferencesRef");
            if let ::core::option::Option::Some(field_theme) = self.theme().transpose() {
                f.field("theme", &field_theme);
            }
            if let ::core::option::Option::Some(field_language) = self.language().transpose() {
                f.field("language", &field_language);
            }
            if let ::core::option::Option::Some(field_notifications) = self.notifications().transpose() {
                f.field("notifications", &field_notifications);
            }
            if let ::core::option::Option::Some(field_privacy) = self.privacy().transpose() {
                f.field("privacy", &field_privacy);
            }
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<PreferencesRef<'a>> for Preferences {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: PreferencesRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                theme: if let ::core::option::Option::Some(theme) = value.theme()? {
                    ::core::option::Option::Some(::core::convert::Into::into(theme))
                } else {
                    ::core::option::Option::None
                },
                language: if let ::core::option::Option::Some(language) = value.language()? {
                    ::core::option::Option::Some(::core::convert::Into::into(language))
                } else {
                    ::core::option::Option::None
                },
                notifications: if let ::core::option::Option::Some(notifications) = value.notifications()? {
                    ::core::option::Option::Some(notifications.to_vec_result()?)
                } else {
                    ::core::option::Option::None
                },
                privacy: if let ::core::option::Option::Some(privacy) = value.privacy()? {
                    ::core::option::Option::Some(::planus::alloc::boxed::Box::new(
                        ::core::convert::TryInto::try_into(privacy)?,
                    ))
                } else {
                    ::core::option::Option::None
                },
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for PreferencesRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for PreferencesRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[PreferencesRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<Preferences>> for Preferences {
        type Value = ::planus::Offset<Preferences>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<Preferences>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for PreferencesRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| {
                error_kind.with_error_location("[PreferencesRef]", "read_as_root", 0)
            })
        }
    }

    /// The table `Profile`
    ///
    /// Generated from these locations:
    /// * Table `Profile` in the file `/src/nestbuf/proto_defs/user_format/user.fbs:24`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct Profile {
        /// The field `first_name` in the table `Profile`
        pub first_name: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `last_name` in the table `Profile`
        pub last_name: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `bio` in the table `Profile`
        pub bio: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `avatar` in the table `Profile`
        pub avatar: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `social_links` in the table `Profile`
        pub social_links: ::core::option::Option<::planus::alloc::vec::Vec<self::Link>>,
        /// The field `preferences` in the table `Profile`
        pub preferences: ::core::option::Option<::planus::alloc::boxed::Box<self::Preferences>>,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for Profile {
        fn default() -> Self {
            Self {
                first_name: ::core::default::Default::default(),
                last_name: ::core::default::Default::default(),
                bio: ::core::default::Default::default(),
                avatar: ::core::default::Default::default(),
                social_links: ::core::default::Default::default(),
                preferences: ::core::default::Default::default(),
            }
        }
    }

    impl Profile {
        /// Creates a [ProfileBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> ProfileBuilder<()> {
            ProfileBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_first_name: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
            field_last_name: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
            field_bio: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
            field_avatar: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
            field_social_links: impl ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::Link>]>>,
            field_preferences: impl ::planus::WriteAsOptional<::planus::Offset<self::Preferences>>,
        ) -> ::planus::Offset<Self> {
            let prepared_first_name = field_first_name.prepare(builder);
            let prepared_last_name = field_last_name.prepare(builder);
            let prepared_bio = field_bio.prepare(builder);
            let prepared_avatar = field_avatar.prepare(builder);
            let prepared_social_links = field_social_links.prepare(builder);
            let prepared_preferences = field_preferences.prepare(builder);

            let mut table_writer: ::planus::table_writer::TableWriter<16> =
                ::core::default::Default::default();
            if prepared_first_name.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(0);
            }
            if prepared_last_name.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(1);
            }
            if prepared_bio.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(2);
            }
            if prepared_avatar.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(3);
            }
            if prepared_social_links.is_some() {
                table_writer.write_entry::<::planus::Offset<[::planus::Offset<self::Link>]>>(4);
            }
            if prepared_preferences.is_some() {
                table_writer.write_entry::<::planus::Offset<self::Preferences>>(5);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_first_name) = prepared_first_name {
                        object_writer.write::<_, _, 4>(&prepared_first_name);
                    }
                    if let ::core::option::Option::Some(prepared_last_name) = prepared_last_name {
                        object_writer.write::<_, _, 4>(&prepared_last_name);
                    }
                    if let ::core::option::Option::Some(prepared_bio) = prepared_bio {
                        object_writer.write::<_, _, 4>(&prepared_bio);
                    }
                    if let ::core::option::Option::Some(prepared_avatar) = prepared_avatar {
                        object_writer.write::<_, _, 4>(&prepared_avatar);
                    }
                    if let ::core::option::Option::Some(prepared_social_links) = prepared_social_links {
                        object_writer.write::<_, _, 4>(&prepared_social_links);
                    }
                    if let ::core::option::Option::Some(prepared_preferences) = prepared_preferences {
                        object_writer.write::<_, _, 4>(&prepared_preferences);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<Profile>> for Profile {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Profile> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<Profile>> for Profile {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<Profile>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<Profile> for Profile {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Profile> {
            Profile::create(builder, &self.first_name, &self.last_name, &self.bio, &self.avatar, &self.social_links, &self.preferences)
        }
    }

    /// Builder for serializing an instance of the [Profile] type.
    ///
    /// Can be created using the [Profile::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct ProfileBuilder<State>(State);

    impl ProfileBuilder<()> {
        /// Setter for the [`first_name` field](Profile#structfield.first_name).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn first_name<T0>(self, value: T0) -> ProfileBuilder<(T0,)>
        where
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            ProfileBuilder((value,))
        }

        /// Sets the [`first_name` field](Profile#structfield.first_name) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn first_name_as_null(self) -> ProfileBuilder<((),)> {
            self.first_name(())
        }
    }

    impl<T0> ProfileBuilder<(T0,)> {
        /// Setter for the [`last_name` field](Profile#structfield.last_name).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn last_name<T1>(self, value: T1) -> ProfileBuilder<(T0, T1)>
        where
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            let (v0,) = self.0;
            ProfileBuilder((v0, value))
        }

        /// Sets the [`last_name` field](Profile#structfield.last_name) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn last_name_as_null(self) -> ProfileBuilder<(T0, ())> {
            self.last_name(())
        }
    }

    impl<T0, T1> ProfileBuilder<(T0, T1)> {
        /// Setter for the [`bio` field](Profile#structfield.bio).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn bio<T2>(self, value: T2) -> ProfileBuilder<(T0, T1, T2)>
        where
            T2: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            let (v0, v1) = self.0;
            ProfileBuilder((v0, v1, value))
        }

        /// Sets the [`bio` field](Profile#structfield.bio) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn bio_as_null(self) -> ProfileBuilder<(T0, T1, ())> {
            self.bio(())
        }
    }

    impl<T0, T1, T2> ProfileBuilder<(T0, T1, T2)> {
        /// Setter for the [`avatar` field](Profile#structfield.avatar).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn avatar<T3>(self, value: T3) -> ProfileBuilder<(T0, T1, T2, T3)>
        where
            T3: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            let (v0, v1, v2) = self.0;
            ProfileBuilder((v0, v1, v2, value))
        }

        /// Sets the [`avatar` field](Profile#structfield.avatar) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn avatar_as_null(self) -> ProfileBuilder<(T0, T1, T2, ())> {
            self.avatar(())
        }
    }

    impl<T0, T1, T2, T3> ProfileBuilder<(T0, T1, T2, T3)> {
        /// Setter for the [`social_links` field](Profile#structfield.social_links).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn social_links<T4>(self, value: T4) -> ProfileBuilder<(T0, T1, T2, T3, T4)>
        where
            T4: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::Link>]>>,
        {
            let (v0, v1, v2, v3) = self.0;
            ProfileBuilder((v0, v1, v2, v3, value))
        }

        /// Sets the [`social_links` field](Profile#structfield.social_links) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn social_links_as_null(self) -> ProfileBuilder<(T0, T1, T2, T3, ())> {
            self.social_links(())
        }
    }

    impl<T0, T1, T2, T3, T4> ProfileBuilder<(T0, T1, T2, T3, T4)> {
        /// Setter for the [`preferences` field](Profile#structfield.preferences).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn preferences<T5>(self, value: T5) -> ProfileBuilder<(T0, T1, T2, T3, T4, T5)>
        where
            T5: ::planus::WriteAsOptional<::planus::Offset<self::Preferences>>,
        {
            let (v0, v1, v2, v3, v4) = self.0;
            ProfileBuilder((v0, v1, v2, v3, v4, value))
        }

        /// Sets the [`preferences` field](Profile#structfield.preferences) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn preferences_as_null(self) -> ProfileBuilder<(T0, T1, T2, T3, T4, ())> {
            self.preferences(())
        }
    }

    impl<T0, T1, T2, T3, T4, T5> ProfileBuilder<(T0, T1, T2, T3, T4, T5)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [Profile].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<Profile>
        where
            Self: ::planus::WriteAsOffset<Profile>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T3: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T4: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::Link>]>>,
            T5: ::planus::WriteAsOptional<::planus::Offset<self::Preferences>>,
        > ::planus::WriteAs<::planus::Offset<Profile>> for ProfileBuilder<(T0, T1, T2, T3, T4, T5)>
    {
        type Prepared = ::planus::Offset<Profile>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Profile> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T3: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T4: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::Link>]>>,
            T5: ::planus::WriteAsOptional<::planus::Offset<self::Preferences>>,
        > ::planus::WriteAsOptional<::planus::Offset<Profile>> for ProfileBuilder<(T0, T1, T2, T3, T4, T5)>
    {
        type Prepared = ::planus::Offset<Profile>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<Profile>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T3: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T4: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::Link>]>>,
            T5: ::planus::WriteAsOptional<::planus::Offset<self::Preferences>>,
        > ::planus::WriteAsOffset<Profile> for ProfileBuilder<(T0, T1, T2, T3, T4, T5)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Profile> {
            let (v0, v1, v2, v3, v4, v5) = &self.0;
            Profile::create(builder, v0, v1, v2, v3, v4, v5)
        }
    }

    /// Reference to a deserialized [Profile].
    #[derive(Copy, Clone)]
    pub struct ProfileRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> ProfileRef<'a> {
        /// Getter for the [`first_name` field](Profile#structfield.first_name).
        #[inline]
        pub fn first_name(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(0, "Profile", "first_name")
        }

        /// Getter for the [`last_name` field](Profile#structfield.last_name).
        #[inline]
        pub fn last_name(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(1, "Profile", "last_name")
        }

        /// Getter for the [`bio` field](Profile#structfield.bio).
        #[inline]
        pub fn bio(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(2, "Profile", "bio")
        }

        /// Getter for the [`avatar` field](Profile#structfield.avatar).
        #[inline]
        pub fn avatar(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(3, "Profile", "avatar")
        }

        /// Getter for the [`social_links` field](Profile#structfield.social_links).
        #[inline]
        pub fn social_links(&self) -> ::planus::Result<::core::option::Option<::planus::Vector<'a, ::planus::Result<self::LinkRef<'a>>>>> {
            self.0.access(4, "Profile", "social_links")
        }

        /// Getter for the [`preferences` field](Profile#structfield.preferences).
        #[inline]
        pub fn preferences(&self) -> ::planus::Result<::core::option::Option<self::PreferencesRef<'a>>> {
            self.0.access(5, "Profile", "preferences")
        }
    }

    impl<'a> ::core::fmt::Debug for ProfileRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("ProfileRef");
            if let ::core::option::Option::Some(field_first_name) = self.first_name().transpose() {
                f.field("first_name", &field_first_name);
            }
            if let ::core::option::Option::Some(field_last_name) = self.last_name().transpose() {
                f.field("last_name", &field_last_name);
            }
            if let ::core::option::Option::Some(field_bio) = self.bio().transpose() {
                f.field("bio", &field_bio);
            }
            if let ::core::option::Option::Some(field_avatar) = self.avatar().transpose() {
                f.field("avatar", &field_avatar);
            }
            if let ::core::option::Option::Some(field_social_links) = self.social_links().transpose() {
                f.field("social_links", &field_social_links);
            }
            if let ::core::option::Option::Some(field_preferences) = self.preferences().transpose() {
                f.field("preferences", &field_preferences);
            }
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<ProfileRef<'a>> for Profile {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: ProfileRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                first_name: if let ::core::option::Option::Some(first_name) = value.first_name()? {
                    ::core::option::Option::Some(::core::convert::Into::into(first_name))
                } else {
                    ::core::option::Option::None
                },
                last_name: if let ::core::option::Option::Some(last_name) = value.last_name()? {
                    ::core::option::Option::Some(::core::convert::Into::into(last_name))
                } else {
                    ::core::option::Option::None
                },
                bio: if let ::core::option::Option::Some(bio) = value.bio()? {
                    ::core::option::Option::Some(::core::convert::Into::into(bio))
                } else {
                    ::core::option::Option::None
                },
                avatar: if let ::core::option::Option::Some(avatar) = value.avatar()? {
                    ::core::option::Option::Some(::core::convert::Into::into(avatar))
                } else {
                    ::core::option::Option::None
                },
                social_links: if let ::core::option::Option::Some(social_links) = value.social_links()? {
                    ::core::option::Option::Some(social_links.to_vec_result()?)
                } else {
                    ::core::option::Option::None
                },
                preferences: if let ::core::option::Option::Some(preferences) = value.preferences()? {
                    ::core::option::Option::Some(::planus::alloc::boxed::Box::new(
                        ::core::convert::TryInto::try_into(preferences)?,
                    ))
                } else {
                    ::core::option::Option::None
                },
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for ProfileRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for ProfileRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[ProfileRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<Profile>> for Profile {
        type Value = ::planus::Offset<Profile>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<Profile>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for ProfileRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| {
                error_kind.with_error_location("[ProfileRef]", "read_as_root", 0)
            })
        }
    }

    /// The table `LimitSetting`
    ///
    /// Generated from these locations:
    /// * Table `LimitSetting` in the file `/src/nestbuf/proto_defs/user_format/user.fbs:33`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct LimitSetting {
        /// The field `key` in the table `LimitSetting`
        pub key: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `value` in the table `LimitSetting`
        pub value: i32,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for LimitSetting {
        fn default() -> Self {
            Self {
                key: ::core::default::Default::default(),
                value: 0,
            }
        }
    }

    impl LimitSetting {
        /// Creates a [LimitSettingBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> LimitSettingBuilder<()> {
            LimitSettingBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_key: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
            field_value: impl ::planus::WriteAsDefault<i32, i32>,
        ) -> ::planus::Offset<Self> {
            let prepared_key = field_key.prepare(builder);
            let prepared_value = field_value.prepare(builder, &0);

            let mut table_writer: ::planus::table_writer::TableWriter<8> =
                ::core::default::Default::default();
            if prepared_key.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(0);
            }
            if prepared_value.is_some() {
                table_writer.write_entry::<i32>(1);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_key) = prepared_key {
                        object_writer.write::<_, _, 4>(&prepared_key);
                    }
                    if let ::core::option::Option::Some(prepared_value) = prepared_value {
                        object_writer.write::<_, _, 4>(&prepared_value);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<LimitSetting>> for LimitSetting {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<LimitSetting> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<LimitSetting>> for LimitSetting {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<LimitSetting>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<LimitSetting> for LimitSetting {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<LimitSetting> {
            LimitSetting::create(builder, &self.key, self.value)
        }
    }

    /// Builder for serializing an instance of the [LimitSetting] type.
    ///
    /// Can be created using the [LimitSetting::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct LimitSettingBuilder<State>(State);

    impl LimitSettingBuilder<()> {
        /// Setter for the [`key` field](LimitSetting#structfield.key).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn key<T0>(self, value: T0) -> LimitSettingBuilder<(T0,)>
        where
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            LimitSettingBuilder((value,))
        }

        /// Sets the [`key` field](LimitSetting#structfield.key) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn key_as_null(self) -> LimitSettingBuilder<((),)> {
            self.key(())
        }
    }

    impl<T0> LimitSettingBuilder<(T0,)> {
        /// Setter for the [`value` field](LimitSetting#structfield.value).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn value<T1>(self, value: T1) -> LimitSettingBuilder<(T0, T1)>
        where
            T1: ::planus::WriteAsDefault<i32, i32>,
        {
            let (v0,) = self.0;
            LimitSettingBuilder((v0, value))
        }

        /// Sets the [`value` field](LimitSetting#structfield.value) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn value_as_default(self) -> LimitSettingBuilder<(T0, ::planus::DefaultValue)> {
            self.value(::planus::DefaultValue)
        }
    }

    impl<T0, T1> LimitSettingBuilder<(T0, T1)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [LimitSetting].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<LimitSetting>
        where
            Self: ::planus::WriteAsOffset<LimitSetting>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsDefault<i32, i32>,
        > ::planus::WriteAs<::planus::Offset<LimitSetting>> for LimitSettingBuilder<(T0, T1)>
    {
        type Prepared = ::planus::Offset<LimitSetting>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<LimitSetting> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsDefault<i32, i32>,
        > ::planus::WriteAsOptional<::planus::Offset<LimitSetting>> for LimitSettingBuilder<(T0, T1)>
    {
        type Prepared = ::planus::Offset<LimitSetting>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<LimitSetting>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsDefault<i32, i32>,
        > ::planus::WriteAsOffset<LimitSetting> for LimitSettingBuilder<(T0, T1)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<LimitSetting> {
            let (v0, v1) = &self.0;
            LimitSetting::create(builder, v0, v1)
        }
    }

    /// Reference to a deserialized [LimitSetting].
    #[derive(Copy, Clone)]
    pub struct LimitSettingRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> LimitSettingRef<'a> {
        /// Getter for the [`key` field](LimitSetting#structfield.key).
        #[inline]
        pub fn key(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(0, "LimitSetting", "key")
        }

        /// Getter for the [`value` field](LimitSetting#structfield.value).
        #[inline]
        pub fn value(&self) -> ::planus::Result<i32> {
            ::core::result::Result::Ok(
                self.0
                    .access(1, "LimitSetting", "value")?
                    .unwrap_or(0),
            )
        }
    }

    impl<'a> ::core::fmt::Debug for LimitSettingRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("LimitSettingRef");
            if let ::core::option::Option::Some(field_key) = self.key().transpose() {
                f.field("key", &field_key);
            }
            f.field("value", &self.value());
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<LimitSettingRef<'a>> for LimitSetting {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: LimitSettingRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                key: if let ::core::option::Option::Some(key) = value.key()? {
                    ::core::option::Option::Some(::core::convert::Into::into(key))
                } else {
                    ::core::option::Option::None
                },
                value: ::core::convert::TryInto::try_into(value.value()?)?,
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for LimitSettingRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for LimitSettingRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[LimitSettingRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<LimitSetting>> for LimitSetting {
        type Value = ::planus::Offset<LimitSetting>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<LimitSetting>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for LimitSettingRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| {
                error_kind.with_error_location("[LimitSettingRef]", "read_as_root", 0)
            })
        }
    }

    /// The table `Settings`
    ///
    /// Generated from these locations:
    /// * Table `Settings` in the file `/src/nestbuf/proto_defs/user_format/user.fbs:38`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct Settings {
        /// The field `language` in the table `Settings`
        pub language: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `timezone` in the table `Settings`
        pub timezone: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `features` in the table `Settings`
        pub features: ::core::option::Option<::planus::alloc::vec::Vec<::planus::alloc::string::String>>,
        /// The field `limits` in the table `Settings`
        pub limits: ::core::option::Option<::planus::alloc::vec::Vec<self::LimitSetting>>,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for Settings {
        fn default() -> Self {
            Self {
                language: ::core::default::Default::default(),
                timezone: ::core::default::Default::default(),
                features: ::core::default::Default::default(),
                limits: ::core::default::Default::default(),
            }
        }
    }

    impl Settings {
        /// Creates a [SettingsBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> SettingsBuilder<()> {
            SettingsBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_language: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
            field_timezone: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
            field_features: impl ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<str>]>>,
            field_limits: impl ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::LimitSetting>]>>,
        ) -> ::planus::Offset<Self> {
            let prepared_language = field_language.prepare(builder);
            let prepared_timezone = field_timezone.prepare(builder);
            let prepared_features = field_features.prepare(builder);
            let prepared_limits = field_limits.prepare(builder);

            let mut table_writer: ::planus::table_writer::TableWriter<12> =
                ::core::default::Default::default();
            if prepared_language.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(0);
            }
            if prepared_timezone.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(1);
            }
            if prepared_features.is_some() {
                table_writer.write_entry::<::planus::Offset<[::planus::Offset<str>]>>(2);
            }
            if prepared_limits.is_some() {
                table_writer.write_entry::<::planus::Offset<[::planus::Offset<self::LimitSetting>]>>(3);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_language) = prepared_language {
                        object_writer.write::<_, _, 4>(&prepared_language);
                    }
                    if let ::core::option::Option::Some(prepared_timezone) = prepared_timezone {
                        object_writer.write::<_, _, 4>(&prepared_timezone);
                    }
                    if let ::core::option::Option::Some(prepared_features) = prepared_features {
                        object_writer.write::<_, _, 4>(&prepared_features);
                    }
                    if let ::core::option::Option::Some(prepared_limits) = prepared_limits {
                        object_writer.write::<_, _, 4>(&prepared_limits);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<Settings>> for Settings {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Settings> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<Settings>> for Settings {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<Settings>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<Settings> for Settings {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Settings> {
            Settings::create(builder, &self.language, &self.timezone, &self.features, &self.limits)
        }
    }

    /// Builder for serializing an instance of the [Settings] type.
    ///
    /// Can be created using the [Settings::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct SettingsBuilder<State>(State);

    impl SettingsBuilder<()> {
        /// Setter for the [`language` field](Settings#structfield.language).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn language<T0>(self, value: T0) -> SettingsBuilder<(T0,)>
        where
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            SettingsBuilder((value,))
        }

        /// Sets the [`language` field](Settings#structfield.language) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn language_as_null(self) -> SettingsBuilder<((),)> {
            self.language(())
        }
    }

    impl<T0> SettingsBuilder<(T0,)> {
        /// Setter for the [`timezone` field](Settings#structfield.timezone).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn timezone<T1>(self, value: T1) -> SettingsBuilder<(T0, T1)>
        where
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            let (v0,) = self.0;
            SettingsBuilder((v0, value))
        }

        /// Sets the [`timezone` field](Settings#structfield.timezone) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn timezone_as_null(self) -> SettingsBuilder<(T0, ())> {
            self.timezone(())
        }
    }

    impl<T0, T1> SettingsBuilder<(T0, T1)> {
        /// Setter for the [`features` field](Settings#structfield.features).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn features<T2>(self, value: T2) -> SettingsBuilder<(T0, T1, T2)>
        where
            T2: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<str>]>>,
        {
            let (v0, v1) = self.0;
            SettingsBuilder((v0, v1, value))
        }

        /// Sets the [`features` field](Settings#structfield.features) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn features_as_null(self) -> SettingsBuilder<(T0, T1, ())> {
            self.features(())
        }
    }

    impl<T0, T1, T2> SettingsBuilder<(T0, T1, T2)> {
        /// Setter for the [`limits` field](Settings#structfield.limits).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn limits<T3>(self, value: T3) -> SettingsBuilder<(T0, T1, T2, T3)>
        where
            T3: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::LimitSetting>]>>,
        {
            let (v0, v1, v2) = self.0;
            SettingsBuilder((v0, v1, v2, value))
        }

        /// Sets the [`limits` field](Settings#structfield.limits) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn limits_as_null(self) -> SettingsBuilder<(T0, T1, T2, ())> {
            self.limits(())
        }
    }

    impl<T0, T1, T2, T3> SettingsBuilder<(T0, T1, T2, T3)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [Settings].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<Settings>
        where
            Self: ::planus::WriteAsOffset<Settings>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<str>]>>,
            T3: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::LimitSetting>]>>,
        > ::planus::WriteAs<::planus::Offset<Settings>> for SettingsBuilder<(T0, T1, T2, T3)>
    {
        type Prepared = ::planus::Offset<Settings>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Settings> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<str>]>>,
            T3: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::LimitSetting>]>>,
        > ::planus::WriteAsOptional<::planus::Offset<Settings>> for SettingsBuilder<(T0, T1, T2, T3)>
    {
        type Prepared = ::planus::Offset<Settings>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<Settings>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<str>]>>,
            T3: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::LimitSetting>]>>,
        > ::planus::WriteAsOffset<Settings> for SettingsBuilder<(T0, T1, T2, T3)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<Settings> {
            let (v0, v1, v2, v3) = &self.0;
            Settings::create(builder, v0, v1, v2, v3)
        }
    }

    /// Reference to a deserialized [Settings].
    #[derive(Copy, Clone)]
    pub struct SettingsRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> SettingsRef<'a> {
        /// Getter for the [`language` field](Settings#structfield.language).
        #[inline]
        pub fn language(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(0, "Settings", "language")
        }

        /// Getter for the [`timezone` field](Settings#structfield.timezone).
        #[inline]
        pub fn timezone(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(1, "Settings", "timezone")
        }

        /// Getter for the [`features` field](Settings#structfield.features).
        #[inline]
        pub fn features(&self) -> ::planus::Result<::core::option::Option<::planus::Vector<'a, ::planus::Result<&'a ::core::primitive::str>>>> {
            self.0.access(2, "Settings", "features")
        }

        /// Getter for the [`limits` field](Settings#structfield.limits).
        #[inline]
        pub fn limits(&self) -> ::planus::Result<::core::option::Option<::planus::Vector<'a, ::planus::Result<self::LimitSettingRef<'a>>>>> {
            self.0.access(3, "Settings", "limits")
        }
    }

    impl<'a> ::core::fmt::Debug for SettingsRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("SettingsRef");
            if let ::core::option::Option::Some(field_language) = self.language().transpose() {
                f.field("language", &field_language);
            }
            if let ::core::option::Option::Some(field_timezone) = self.timezone().transpose() {
                f.field("timezone", &field_timezone);
            }
            if let ::core::option::Option::Some(field_features) = self.features().transpose() {
                f.field("features", &field_features);
            }
            if let ::core::option::Option::Some(field_limits) = self.limits().transpose() {
                f.field("limits", &field_limits);
            }
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<SettingsRef<'a>> for Settings {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: SettingsRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                language: if let ::core::option::Option::Some(language) = value.language()? {
                    ::core::option::Option::Some(::core::convert::Into::into(language))
                } else {
                    ::core::option::Option::None
                },
                timezone: if let ::core::option::Option::Some(timezone) = value.timezone()? {
                    ::core::option::Option::Some(::core::convert::Into::into(timezone))
                } else {
                    ::core::option::Option::None
                },
                features: if let ::core::option::Option::Some(features) = value.features()? {
                    ::core::option::Option::Some(features.to_vec_result()?)
                } else {
                    ::core::option::Option::None
                },
                limits: if let ::core::option::Option::Some(limits) = value.limits()? {
                    ::core::option::Option::Some(limits.to_vec_result()?)
                } else {
                    ::core::option::Option::None
                },
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for SettingsRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for SettingsRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[SettingsRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<Settings>> for Settings {
        type Value = ::planus::Offset<Settings>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<Settings>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for SettingsRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| {
                error_kind.with_error_location("[SettingsRef]", "read_as_root", 0)
            })
        }
    }

    /// The table `MetadataEntry`
    ///
    /// Generated from these locations:
    /// * Table `MetadataEntry` in the file `/src/nestbuf/proto_defs/user_format/user.fbs:47`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct MetadataEntry {
        /// The field `key` in the table `MetadataEntry`
        pub key: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `value_type` in the table `MetadataEntry`
        pub value_type: u8,
        /// The field `string_value` in the table `MetadataEntry`
        pub string_value: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `int_value` in the table `MetadataEntry`
        pub int_value: i32,
        /// The field `bool_value` in the table `MetadataEntry`
        pub bool_value: bool,
        /// The field `float_value` in the table `MetadataEntry`
        pub float_value: f64,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for MetadataEntry {
        fn default() -> Self {
            Self {
                key: ::core::default::Default::default(),
                value_type: 0,
                string_value: ::core::default::Default::default(),
                int_value: 0,
                bool_value: false,
                float_value: 0.0,
            }
        }
    }

    impl MetadataEntry {
        /// Creates a [MetadataEntryBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> MetadataEntryBuilder<()> {
            MetadataEntryBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_key: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
            field_value_type: impl ::planus::WriteAsDefault<u8, u8>,
            field_string_value: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
            field_int_value: impl ::planus::WriteAsDefault<i32, i32>,
            field_bool_value: impl ::planus::WriteAsDefault<bool, bool>,
            field_float_value: impl ::planus::WriteAsDefault<f64, f64>,
        ) -> ::planus::Offset<Self> {
            let prepared_key = field_key.prepare(builder);
            let prepared_value_type = field_value_type.prepare(builder, &0);
            let prepared_string_value = field_string_value.prepare(builder);
            let prepared_int_value = field_int_value.prepare(builder, &0);
            let prepared_bool_value = field_bool_value.prepare(builder, &false);
            let prepared_float_value = field_float_value.prepare(builder, &0.0);

            let mut table_writer: ::planus::table_writer::TableWriter<16> =
                ::core::default::Default::default();
            if prepared_float_value.is_some() {
                table_writer.write_entry::<f64>(5);
            }
            if prepared_key.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(0);
            }
            if prepared_string_value.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(2);
            }
            if prepared_int_value.is_some() {
                table_writer.write_entry::<i32>(3);
            }
            if prepared_value_type.is_some() {
                table_writer.write_entry::<u8>(1);
            }
            if prepared_bool_value.is_some() {
                table_writer.write_entry::<bool>(4);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_float_value) = prepared_float_value {
                        object_writer.write::<_, _, 8>(&prepared_float_value);
                    }
                    if let ::core::option::Option::Some(prepared_key) = prepared_key {
                        object_writer.write::<_, _, 4>(&prepared_key);
                    }
                    if let ::core::option::Option::Some(prepared_string_value) = prepared_string_value {
                        object_writer.write::<_, _, 4>(&prepared_string_value);
                    }
                    if let ::core::option::Option::Some(prepared_int_value) = prepared_int_value {
                        object_writer.write::<_, _, 4>(&prepared_int_value);
                    }
                    if let ::core::option::Option::Some(prepared_value_type) = prepared_value_type {
                        object_writer.write::<_, _, 1>(&prepared_value_type);
                    }
                    if let ::core::option::Option::Some(prepared_bool_value) = prepared_bool_value {
                        object_writer.write::<_, _, 1>(&prepared_bool_value);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<MetadataEntry>> for MetadataEntry {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<MetadataEntry> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<MetadataEntry>> for MetadataEntry {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<MetadataEntry>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<MetadataEntry> for MetadataEntry {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<MetadataEntry> {
            MetadataEntry::create(builder, &self.key, self.value_type, &self.string_value, self.int_value, self.bool_value, self.float_value)
        }
    }

    /// Builder for serializing an instance of the [MetadataEntry] type.
    ///
    /// Can be created using the [MetadataEntry::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct MetadataEntryBuilder<State>(State);

    impl MetadataEntryBuilder<()> {
        /// Setter for the [`key` field](MetadataEntry#structfield.key).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn key<T0>(self, value: T0) -> MetadataEntryBuilder<(T0,)>
        where
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            MetadataEntryBuilder((value,))
        }

        /// Sets the [`key` field](MetadataEntry#structfield.key) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn key_as_null(self) -> MetadataEntryBuilder<((),)> {
            self.key(())
        }
    }

    impl<T0> MetadataEntryBuilder<(T0,)> {
        /// Setter for the [`value_type` field](MetadataEntry#structfield.value_type).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn value_type<T1>(self, value: T1) -> MetadataEntryBuilder<(T0, T1)>
        where
            T1: ::planus::WriteAsDefault<u8, u8>,
        {
            let (v0,) = self.0;
            MetadataEntryBuilder((v0, value))
        }

        /// Sets the [`value_type` field](MetadataEntry#structfield.value_type) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn value_type_as_default(self) -> MetadataEntryBuilder<(T0, ::planus::DefaultValue)> {
            self.value_type(::planus::DefaultValue)
        }
    }

    impl<T0, T1> MetadataEntryBuilder<(T0, T1)> {
        /// Setter for the [`string_value` field](MetadataEntry#structfield.string_value).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn string_value<T2>(self, value: T2) -> MetadataEntryBuilder<(T0, T1, T2)>
        where
            T2: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            let (v0, v1) = self.0;
            MetadataEntryBuilder((v0, v1, value))
        }

        /// Sets the [`string_value` field](MetadataEntry#structfield.string_value) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn string_value_as_null(self) -> MetadataEntryBuilder<(T0, T1, ())> {
            self.string_value(())
        }
    }

    impl<T0, T1, T2> MetadataEntryBuilder<(T0, T1, T2)> {
        /// Setter for the [`int_value` field](MetadataEntry#structfield.int_value).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn int_value<T3>(self, value: T3) -> MetadataEntryBuilder<(T0, T1, T2, T3)>
        where
            T3: ::planus::WriteAsDefault<i32, i32>,
        {
            let (v0, v1, v2) = self.0;
            MetadataEntryBuilder((v0, v1, v2, value))
        }

        /// Sets the [`int_value` field](MetadataEntry#structfield.int_value) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn int_value_as_default(self) -> MetadataEntryBuilder<(T0, T1, T2, ::planus::DefaultValue)> {
            self.int_value(::planus::DefaultValue)
        }
    }

    impl<T0, T1, T2, T3> MetadataEntryBuilder<(T0, T1, T2, T3)> {
        /// Setter for the [`bool_value` field](MetadataEntry#structfield.bool_value).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn bool_value<T4>(self, value: T4) -> MetadataEntryBuilder<(T0, T1, T2, T3, T4)>
        where
            T4: ::planus::WriteAsDefault<bool, bool>,
        {
            let (v0, v1, v2, v3) = self.0;
            MetadataEntryBuilder((v0, v1, v2, v3, value))
        }

        /// Sets the [`bool_value` field](MetadataEntry#structfield.bool_value) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn bool_value_as_default(self) -> MetadataEntryBuilder<(T0, T1, T2, T3, ::planus::DefaultValue)> {
            self.bool_value(::planus::DefaultValue)
        }
    }

    impl<T0, T1, T2, T3, T4> MetadataEntryBuilder<(T0, T1, T2, T3, T4)> {
        /// Setter for the [`float_value` field](MetadataEntry#structfield.float_value).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn float_value<T5>(self, value: T5) -> MetadataEntryBuilder<(T0, T1, T2, T3, T4, T5)>
        where
            T5: ::planus::WriteAsDefault<f64, f64>,
        {
            let (v0, v1, v2, v3, v4) = self.0;
            MetadataEntryBuilder((v0, v1, v2, v3, v4, value))
        }

        /// Sets the [`float_value` field](MetadataEntry#structfield.float_value) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn float_value_as_default(self) -> MetadataEntryBuilder<(T0, T1, T2, T3, T4, ::planus::DefaultValue)> {
            self.float_value(::planus::DefaultValue)
        }
    }

    impl<T0, T1, T2, T3, T4, T5> MetadataEntryBuilder<(T0, T1, T2, T3, T4, T5)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [MetadataEntry].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<MetadataEntry>
        where
            Self: ::planus::WriteAsOffset<MetadataEntry>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsDefault<u8, u8>,
            T2: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T3: ::planus::WriteAsDefault<i32, i32>,
            T4: ::planus::WriteAsDefault<bool, bool>,
            T5: ::planus::WriteAsDefault<f64, f64>,
        > ::planus::WriteAs<::planus::Offset<MetadataEntry>> for MetadataEntryBuilder<(T0, T1, T2, T3, T4, T5)>
    {
        type Prepared = ::planus::Offset<MetadataEntry>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<MetadataEntry> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsDefault<u8, u8>,
            T2: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T3: ::planus::WriteAsDefault<i32, i32>,
            T4: ::planus::WriteAsDefault<bool, bool>,
            T5: ::planus::WriteAsDefault<f64, f64>,
        > ::planus::WriteAsOptional<::planus::Offset<MetadataEntry>> for MetadataEntryBuilder<(T0, T1, T2, T3, T4, T5)>
    {
        type Prepared = ::planus::Offset<MetadataEntry>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<MetadataEntry>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T1: ::planus::WriteAsDefault<u8, u8>,
            T2: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T3: ::planus::WriteAsDefault<i32, i32>,
            T4: ::planus::WriteAsDefault<bool, bool>,
            T5: ::planus::WriteAsDefault<f64, f64>,
        > ::planus::WriteAsOffset<MetadataEntry> for MetadataEntryBuilder<(T0, T1, T2, T3, T4, T5)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<MetadataEntry> {
            let (v0, v1, v2, v3, v4, v5) = &self.0;
            MetadataEntry::create(builder, v0, v1, v2, v3, v4, v5)
        }
    }

    /// Reference to a deserialized [MetadataEntry].
    #[derive(Copy, Clone)]
    pub struct MetadataEntryRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> MetadataEntryRef<'a> {
        /// Getter for the [`key` field](MetadataEntry#structfield.key).
        #[inline]
        pub fn key(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(0, "MetadataEntry", "key")
        }

        /// Getter for the [`value_type` field](MetadataEntry#structfield.value_type).
        #[inline]
        pub fn value_type(&self) -> ::planus::Result<u8> {
            ::core::result::Result::Ok(
                self.0
                    .access(1, "MetadataEntry", "value_type")?
                    .unwrap_or(0),
            )
        }

        /// Getter for the [`string_value` field](MetadataEntry#structfield.string_value).
        #[inline]
        pub fn string_value(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(2, "MetadataEntry", "string_value")
        }

        /// Getter for the [`int_value` field](MetadataEntry#structfield.int_value).
        #[inline]
        pub fn int_value(&self) -> ::planus::Result<i32> {
            ::core::result::Result::Ok(
                self.0
                    .access(3, "MetadataEntry", "int_value")?
                    .unwrap_or(0),
            )
        }

        /// Getter for the [`bool_value` field](MetadataEntry#structfield.bool_value).
        #[inline]
        pub fn bool_value(&self) -> ::planus::Result<bool> {
            ::core::result::Result::Ok(
                self.0
                    .access(4, "MetadataEntry", "bool_value")?
                    .unwrap_or(false),
            )
        }

        /// Getter for the [`float_value` field](MetadataEntry#structfield.float_value).
        #[inline]
        pub fn float_value(&self) -> ::planus::Result<f64> {
            ::core::result::Result::Ok(
                self.0
                    .access(5, "MetadataEntry", "float_value")?
                    .unwrap_or(0.0),
            )
        }
    }

    impl<'a> ::core::fmt::Debug for MetadataEntryRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("MetadataEntryRef");
            if let ::core::option::Option::Some(field_key) = self.key().transpose() {
                f.field("key", &field_key);
            }
            f.field("value_type", &self.value_type());
            if let ::core::option::Option::Some(field_string_value) = self.string_value().transpose() {
                f.field("string_value", &field_string_value);
            }
            f.field("int_value", &self.int_value());
            f.field("bool_value", &self.bool_value());
            f.field("float_value", &self.float_value());
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<MetadataEntryRef<'a>> for MetadataEntry {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: MetadataEntryRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                key: if let ::core::option::Option::Some(key) = value.key()? {
                    ::core::option::Option::Some(::core::convert::Into::into(key))
                } else {
                    ::core::option::Option::None
                },
                value_type: ::core::convert::TryInto::try_into(value.value_type()?)?,
                string_value: if let ::core::option::Option::Some(string_value) = value.string_value()? {
                    ::core::option::Option::Some(::core::convert::Into::into(string_value))
                } else {
                    ::core::option::Option::None
                },
                int_value: ::core::convert::TryInto::try_into(value.int_value()?)?,
                bool_value: ::core::convert::TryInto::try_into(value.bool_value()?)?,
                float_value: ::core::convert::TryInto::try_into(value.float_value()?)?,
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for MetadataEntryRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for MetadataEntryRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[MetadataEntryRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<MetadataEntry>> for MetadataEntry {
        type Value = ::planus::Offset<MetadataEntry>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<MetadataEntry>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for MetadataEntryRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| {
                error_kind.with_error_location("[MetadataEntryRef]", "read_as_root", 0)
            })
        }
    }

    /// The table `User`
    ///
    /// Generated from these locations:
    /// * Table `User` in the file `/src/nestbuf/proto_defs/user_format/user.fbs:56`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct User {
        /// The field `id` in the table `User`
        pub id: i64,
        /// The field `name` in the table `User`
        pub name: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `email` in the table `User`
        pub email: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `age` in the table `User`
        pub age: i32,
        /// The field `is_active` in the table `User`
        pub is_active: bool,
        /// The field `profile` in the table `User`
        pub profile: ::core::option::Option<::planus::alloc::boxed::Box<self::Profile>>,
        /// The field `settings` in the table `User`
        pub settings: ::core::option::Option<::planus::alloc::boxed::Box<self::Settings>>,
        /// The field `tags` in the table `User`
        pub tags: ::core::option::Option<::planus::alloc::vec::Vec<::planus::alloc::string::String>>,
        /// The field `metadata` in the table `User`
        pub metadata: ::core::option::Option<::planus::alloc::vec::Vec<self::MetadataEntry>>,
        /// The field `created_at` in the table `User`
        pub created_at: i64,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for User {
        fn default() -> Self {
            Self {
                id: 0,
                name: ::core::default::Default::default(),
                email: ::core::default::Default::default(),
                age: 0,
                is_active: false,
                profile: ::core::default::Default::default(),
                settings: ::core::default::Default::default(),
                tags: ::core::default::Default::default(),
                metadata: ::core::default::Default::default(),
                created_at: 0,
            }
        }
    }

    impl User {
        /// Creates a [UserBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> UserBuilder<()> {
            UserBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_id: impl ::planus::WriteAsDefault<i64, i64>,
            field_name: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
            field_email: impl ::planus::WriteAsOptional<::planus::Offset<str>>,
            field_age: impl ::planus::WriteAsDefault<i32, i32>,
            field_is_active: impl ::planus::WriteAsDefault<bool, bool>,
            field_profile: impl ::planus::WriteAsOptional<::planus::Offset<self::Profile>>,
            field_settings: impl ::planus::WriteAsOptional<::planus::Offset<self::Settings>>,
            field_tags: impl ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<str>]>>,
            field_metadata: impl ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::MetadataEntry>]>>,
            field_created_at: impl ::planus::WriteAsDefault<i64, i64>,
        ) -> ::planus::Offset<Self> {
            let prepared_id = field_id.prepare(builder, &0);
            let prepared_name = field_name.prepare(builder);
            let prepared_email = field_email.prepare(builder);
            let prepared_age = field_age.prepare(builder, &0);
            let prepared_is_active = field_is_active.prepare(builder, &false);
            let prepared_profile = field_profile.prepare(builder);
            let prepared_settings = field_settings.prepare(builder);
            let prepared_tags = field_tags.prepare(builder);
            let prepared_metadata = field_metadata.prepare(builder);
            let prepared_created_at = field_created_at.prepare(builder, &0);

            let mut table_writer: ::planus::table_writer::TableWriter<24> =
                ::core::default::Default::default();
            if prepared_id.is_some() {
                table_writer.write_entry::<i64>(0);
            }
            if prepared_created_at.is_some() {
                table_writer.write_entry::<i64>(9);
            }
            if prepared_name.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(1);
            }
            if prepared_email.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(2);
            }
            if prepared_age.is_some() {
                table_writer.write_entry::<i32>(3);
            }
            if prepared_profile.is_some() {
                table_writer.write_entry::<::planus::Offset<self::Profile>>(5);
            }
            if prepared_settings.is_some() {
                table_writer.write_entry::<::planus::Offset<self::Settings>>(6);
            }
            if prepared_tags.is_some() {
                table_writer.write_entry::<::planus::Offset<[::planus::Offset<str>]>>(7);
            }
            if prepared_metadata.is_some() {
                table_writer.write_entry::<::planus::Offset<[::planus::Offset<self::MetadataEntry>]>>(8);
            }
            if prepared_is_active.is_some() {
                table_writer.write_entry::<bool>(4);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_id) = prepared_id {
                        object_writer.write::<_, _, 8>(&prepared_id);
                    }
                    if let ::core::option::Option::Some(prepared_created_at) = prepared_created_at {
                        object_writer.write::<_, _, 8>(&prepared_created_at);
                    }
                    if let ::core::option::Option::Some(prepared_name) = prepared_name {
                        object_writer.write::<_, _, 4>(&prepared_name);
                    }
                    if let ::core::option::Option::Some(prepared_email) = prepared_email {
                        object_writer.write::<_, _, 4>(&prepared_email);
                    }
                    if let ::core::option::Option::Some(prepared_age) = prepared_age {
                        object_writer.write::<_, _, 4>(&prepared_age);
                    }
                    if let ::core::option::Option::Some(prepared_profile) = prepared_profile {
                        object_writer.write::<_, _, 4>(&prepared_profile);
                    }
                    if let ::core::option::Option::Some(prepared_settings) = prepared_settings {
                        object_writer.write::<_, _, 4>(&prepared_settings);
                    }
                    if let ::core::option::Option::Some(prepared_tags) = prepared_tags {
                        object_writer.write::<_, _, 4>(&prepared_tags);
                    }
                    if let ::core::option::Option::Some(prepared_metadata) = prepared_metadata {
                        object_writer.write::<_, _, 4>(&prepared_metadata);
                    }
                    if let ::core::option::Option::Some(prepared_is_active) = prepared_is_active {
                        object_writer.write::<_, _, 1>(&prepared_is_active);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<User>> for User {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<User> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<User>> for User {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<User>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<User> for User {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<User> {
            User::create(builder, self.id, &self.name, &self.email, self.age, self.is_active, &self.profile, &self.settings, &self.tags, &self.metadata, self.created_at)
        }
    }

    /// Builder for serializing an instance of the [User] type.
    ///
    /// Can be created using the [User::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct UserBuilder<State>(State);

    impl UserBuilder<()> {
        /// Setter for the [`id` field](User#structfield.id).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn id<T0>(self, value: T0) -> UserBuilder<(T0,)>
        where
            T0: ::planus::WriteAsDefault<i64, i64>,
        {
            UserBuilder((value,))
        }

        /// Sets the [`id` field](User#structfield.id) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn id_as_default(self) -> UserBuilder<(::planus::DefaultValue,)> {
            self.id(::planus::DefaultValue)
        }
    }

    impl<T0> UserBuilder<(T0,)> {
        /// Setter for the [`name` field](User#structfield.name).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn name<T1>(self, value: T1) -> UserBuilder<(T0, T1)>
        where
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            let (v0,) = self.0;
            UserBuilder((v0, value))
        }

        /// Sets the [`name` field](User#structfield.name) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn name_as_null(self) -> UserBuilder<(T0, ())> {
            self.name(())
        }
    }

    impl<T0, T1> UserBuilder<(T0, T1)> {
        /// Setter for the [`email` field](User#structfield.email).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn email<T2>(self, value: T2) -> UserBuilder<(T0, T1, T2)>
        where
            T2: ::planus::WriteAsOptional<::planus::Offset<str>>,
        {
            let (v0, v1) = self.0;
            UserBuilder((v0, v1, value))
        }

        /// Sets the [`email` field](User#structfield.email) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn email_as_null(self) -> UserBuilder<(T0, T1, ())> {
            self.email(())
        }
    }

    impl<T0, T1, T2> UserBuilder<(T0, T1, T2)> {
        /// Setter for the [`age` field](User#structfield.age).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn age<T3>(self, value: T3) -> UserBuilder<(T0, T1, T2, T3)>
        where
            T3: ::planus::WriteAsDefault<i32, i32>,
        {
            let (v0, v1, v2) = self.0;
            UserBuilder((v0, v1, v2, value))
        }

        /// Sets the [`age` field](User#structfield.age) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn age_as_default(self) -> UserBuilder<(T0, T1, T2, ::planus::DefaultValue)> {
            self.age(::planus::DefaultValue)
        }
    }

    impl<T0, T1, T2, T3> UserBuilder<(T0, T1, T2, T3)> {
        /// Setter for the [`is_active` field](User#structfield.is_active).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn is_active<T4>(self, value: T4) -> UserBuilder<(T0, T1, T2, T3, T4)>
        where
            T4: ::planus::WriteAsDefault<bool, bool>,
        {
            let (v0, v1, v2, v3) = self.0;
            UserBuilder((v0, v1, v2, v3, value))
        }

        /// Sets the [`is_active` field](User#structfield.is_active) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn is_active_as_default(self) -> UserBuilder<(T0, T1, T2, T3, ::planus::DefaultValue)> {
            self.is_active(::planus::DefaultValue)
        }
    }

    impl<T0, T1, T2, T3, T4> UserBuilder<(T0, T1, T2, T3, T4)> {
        /// Setter for the [`profile` field](User#structfield.profile).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn profile<T5>(self, value: T5) -> UserBuilder<(T0, T1, T2, T3, T4, T5)>
        where
            T5: ::planus::WriteAsOptional<::planus::Offset<self::Profile>>,
        {
            let (v0, v1, v2, v3, v4) = self.0;
            UserBuilder((v0, v1, v2, v3, v4, value))
        }

        /// Sets the [`profile` field](User#structfield.profile) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn profile_as_null(self) -> UserBuilder<(T0, T1, T2, T3, T4, ())> {
            self.profile(())
        }
    }

    impl<T0, T1, T2, T3, T4, T5> UserBuilder<(T0, T1, T2, T3, T4, T5)> {
        /// Setter for the [`settings` field](User#structfield.settings).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn settings<T6>(self, value: T6) -> UserBuilder<(T0, T1, T2, T3, T4, T5, T6)>
        where
            T6: ::planus::WriteAsOptional<::planus::Offset<self::Settings>>,
        {
            let (v0, v1, v2, v3, v4, v5) = self.0;
            UserBuilder((v0, v1, v2, v3, v4, v5, value))
        }

        /// Sets the [`settings` field](User#structfield.settings) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn settings_as_null(self) -> UserBuilder<(T0, T1, T2, T3, T4, T5, ())> {
            self.settings(())
        }
    }

    impl<T0, T1, T2, T3, T4, T5, T6> UserBuilder<(T0, T1, T2, T3, T4, T5, T6)> {
        /// Setter for the [`tags` field](User#structfield.tags).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn tags<T7>(self, value: T7) -> UserBuilder<(T0, T1, T2, T3, T4, T5, T6, T7)>
        where
            T7: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<str>]>>,
        {
            let (v0, v1, v2, v3, v4, v5, v6) = self.0;
            UserBuilder((v0, v1, v2, v3, v4, v5, v6, value))
        }

        /// Sets the [`tags` field](User#structfield.tags) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn tags_as_null(self) -> UserBuilder<(T0, T1, T2, T3, T4, T5, T6, ())> {
            self.tags(())
        }
    }

    impl<T0, T1, T2, T3, T4, T5, T6, T7> UserBuilder<(T0, T1, T2, T3, T4, T5, T6, T7)> {
        /// Setter for the [`metadata` field](User#structfield.metadata).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn metadata<T8>(self, value: T8) -> UserBuilder<(T0, T1, T2, T3, T4, T5, T6, T7, T8)>
        where
            T8: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::MetadataEntry>]>>,
        {
            let (v0, v1, v2, v3, v4, v5, v6, v7) = self.0;
            UserBuilder((v0, v1, v2, v3, v4, v5, v6, v7, value))
        }

        /// Sets the [`metadata` field](User#structfield.metadata) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn metadata_as_null(self) -> UserBuilder<(T0, T1, T2, T3, T4, T5, T6, T7, ())> {
            self.metadata(())
        }
    }

    impl<T0, T1, T2, T3, T4, T5, T6, T7, T8> UserBuilder<(T0, T1, T2, T3, T4, T5, T6, T7, T8)> {
        /// Setter for the [`created_at` field](User#structfield.created_at).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn created_at<T9>(self, value: T9) -> UserBuilder<(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9)>
        where
            T9: ::planus::WriteAsDefault<i64, i64>,
        {
            let (v0, v1, v2, v3, v4, v5, v6, v7, v8) = self.0;
            UserBuilder((v0, v1, v2, v3, v4, v5, v6, v7, v8, value))
        }

        /// Sets the [`created_at` field](User#structfield.created_at) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn created_at_as_default(self) -> UserBuilder<(T0, T1, T2, T3, T4, T5, T6, T7, T8, ::planus::DefaultValue)> {
            self.created_at(::planus::DefaultValue)
        }
    }

    impl<T0, T1, T2, T3, T4, T5, T6, T7, T8, T9> UserBuilder<(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [User].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<User>
        where
            Self: ::planus::WriteAsOffset<User>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<i64, i64>,
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T3: ::planus::WriteAsDefault<i32, i32>,
            T4: ::planus::WriteAsDefault<bool, bool>,
            T5: ::planus::WriteAsOptional<::planus::Offset<self::Profile>>,
            T6: ::planus::WriteAsOptional<::planus::Offset<self::Settings>>,
            T7: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<str>]>>,
            T8: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::MetadataEntry>]>>,
            T9: ::planus::WriteAsDefault<i64, i64>,
        > ::planus::WriteAs<::planus::Offset<User>> for UserBuilder<(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9)>
    {
        type Prepared = ::planus::Offset<User>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<User> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<i64, i64>,
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T3: ::planus::WriteAsDefault<i32, i32>,
            T4: ::planus::WriteAsDefault<bool, bool>,
            T5: ::planus::WriteAsOptional<::planus::Offset<self::Profile>>,
            T6: ::planus::WriteAsOptional<::planus::Offset<self::Settings>>,
            T7: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<str>]>>,
            T8: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::MetadataEntry>]>>,
            T9: ::planus::WriteAsDefault<i64, i64>,
        > ::planus::WriteAsOptional<::planus::Offset<User>> for UserBuilder<(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9)>
    {
        type Prepared = ::planus::Offset<User>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<User>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<i64, i64>,
            T1: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<str>>,
            T3: ::planus::WriteAsDefault<i32, i32>,
            T4: ::planus::WriteAsDefault<bool, bool>,
            T5: ::planus::WriteAsOptional<::planus::Offset<self::Profile>>,
            T6: ::planus::WriteAsOptional<::planus::Offset<self::Settings>>,
            T7: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<str>]>>,
            T8: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::MetadataEntry>]>>,
            T9: ::planus::WriteAsDefault<i64, i64>,
        > ::planus::WriteAsOffset<User> for UserBuilder<(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<User> {
            let (v0, v1, v2, v3, v4, v5, v6, v7, v8, v9) = &self.0;
            User::create(builder, v0, v1, v2, v3, v4, v5, v6, v7, v8, v9)
        }
    }

    /// Reference to a deserialized [User].
    #[derive(Copy, Clone)]
    pub struct UserRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> UserRef<'a> {
        /// Getter for the [`id` field](User#structfield.id).
        #[inline]
        pub fn id(&self) -> ::planus::Result<i64> {
            ::core::result::Result::Ok(
                self.0
                    .access(0, "User", "id")?
                    .unwrap_or(0),
            )
        }

        /// Getter for the [`name` field](User#structfield.name).
        #[inline]
        pub fn name(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(1, "User", "name")
        }

        /// Getter for the [`email` field](User#structfield.email).
        #[inline]
        pub fn email(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(2, "User", "email")
        }

        /// Getter for the [`age` field](User#structfield.age).
        #[inline]
        pub fn age(&self) -> ::planus::Result<i32> {
            ::core::result::Result::Ok(
                self.0
                    .access(3, "User", "age")?
                    .unwrap_or(0),
            )
        }

        /// Getter for the [`is_active` field](User#structfield.is_active).
        #[inline]
        pub fn is_active(&self) -> ::planus::Result<bool> {
            ::core::result::Result::Ok(
                self.0
                    .access(4, "User", "is_active")?
                    .unwrap_or(false),
            )
        }

        /// Getter for the [`profile` field](User#structfield.profile).
        #[inline]
        pub fn profile(&self) -> ::planus::Result<::core::option::Option<self::ProfileRef<'a>>> {
            self.0.access(5, "User", "profile")
        }

        /// Getter for the [`settings` field](User#structfield.settings).
        #[inline]
        pub fn settings(&self) -> ::planus::Result<::core::option::Option<self::SettingsRef<'a>>> {
            self.0.access(6, "User", "settings")
        }

        /// Getter for the [`tags` field](User#structfield.tags).
        #[inline]
        pub fn tags(&self) -> ::planus::Result<::core::option::Option<::planus::Vector<'a, ::planus::Result<&'a ::core::primitive::str>>>> {
            self.0.access(7, "User", "tags")
        }

        /// Getter for the [`metadata` field](User#structfield.metadata).
        #[inline]
        pub fn metadata(&self) -> ::planus::Result<::core::option::Option<::planus::Vector<'a, ::planus::Result<self::MetadataEntryRef<'a>>>>> {
            self.0.access(8, "User", "metadata")
        }

        /// Getter for the [`created_at` field](User#structfield.created_at).
        #[inline]
        pub fn created_at(&self) -> ::planus::Result<i64> {
            ::core::result::Result::Ok(
                self.0
                    .access(9, "User", "created_at")?
                    .unwrap_or(0),
            )
        }
    }

    impl<'a> ::core::fmt::Debug for UserRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("UserRef");
            f.field("id", &self.id());
            if let ::core::option::Option::Some(field_name) = self.name().transpose() {
                f.field("name", &field_name);
            }
            if let ::core::option::Option::Some(field_email) = self.email().transpose() {
                f.field("email", &field_email);
            }
            f.field("age", &self.age());
            f.field("is_active", &self.is_active());
            if let ::core::option::Option::Some(field_profile) = self.profile().transpose() {
                f.field("profile", &field_profile);
            }
            if let ::core::option::Option::Some(field_settings) = self.settings().transpose() {
                f.field("settings", &field_settings);
            }
            if let ::core::option::Option::Some(field_tags) = self.tags().transpose() {
                f.field("tags", &field_tags);
            }
            if let ::core::option::Option::Some(field_metadata) = self.metadata().transpose() {
                f.field("metadata", &field_metadata);
            }
            f.field("created_at", &self.created_at());
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<UserRef<'a>> for User {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: UserRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                id: ::core::convert::TryInto::try_into(value.id()?)?,
                name: if let ::core::option::Option::Some(name) = value.name()? {
                    ::core::option::Option::Some(::core::convert::Into::into(name))
                } else {
                    ::core::option::Option::None
                },
                email: if let ::core::option::Option::Some(email) = value.email()? {
                    ::core::option::Option::Some(::core::convert::Into::into(email))
                } else {
                    ::core::option::Option::None
                },
                age: ::core::convert::TryInto::try_into(value.age()?)?,
                is_active: ::core::convert::TryInto::try_into(value.is_active()?)?,
                profile: if let ::core::option::Option::Some(profile) = value.profile()? {
                    ::core::option::Option::Some(::planus::alloc::boxed::Box::new(
                        ::core::convert::TryInto::try_into(profile)?,
                    ))
                } else {
                    ::core::option::Option::None
                },
                settings: if let ::core::option::Option::Some(settings) = value.settings()? {
                    ::core::option::Option::Some(::planus::alloc::boxed::Box::new(
                        ::core::convert::TryInto::try_into(settings)?,
                    ))
                } else {
                    ::core::option::Option::None
                },
                tags: if let ::core::option::Option::Some(tags) = value.tags()? {
                    ::core::option::Option::Some(tags.to_vec_result()?)
                } else {
                    ::core::option::Option::None
                },
                metadata: if let ::core::option::Option::Some(metadata) = value.metadata()? {
                    ::core::option::Option::Some(metadata.to_vec_result()?)
                } else {
                    ::core::option::Option::None
                },
                created_at: ::core::convert::TryInto::try_into(value.created_at()?)?,
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for UserRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for UserRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[UserRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<User>> for User {
        type Value = ::planus::Offset<User>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<User>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for UserRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| {
                error_kind.with_error_location("[UserRef]", "read_as_root", 0)
            })
        }
    }

    /// The table `UserList`
    ///
    /// Generated from these locations:
    /// * Table `UserList` in the file `/src/nestbuf/proto_defs/user_format/user.fbs:69`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct UserList {
        /// The field `users` in the table `UserList`
        pub users: ::core::option::Option<::planus::alloc::vec::Vec<self::User>>,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for UserList {
        fn default() -> Self {
            Self {
                users: ::core::default::Default::default(),
            }
        }
    }

    impl UserList {
        /// Creates a [UserListBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> UserListBuilder<()> {
            UserListBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_users: impl ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::User>]>>,
        ) -> ::planus::Offset<Self> {
            let prepared_users = field_users.prepare(builder);

            let mut table_writer: ::planus::table_writer::TableWriter<6> =
                ::core::default::Default::default();
            if prepared_users.is_some() {
                table_writer.write_entry::<::planus::Offset<[::planus::Offset<self::User>]>>(0);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_users) = prepared_users {
                        object_writer.write::<_, _, 4>(&prepared_users);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<UserList>> for UserList {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<UserList> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<UserList>> for UserList {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<UserList>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<UserList> for UserList {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<UserList> {
            UserList::create(builder, &self.users)
        }
    }

    /// Builder for serializing an instance of the [UserList] type.
    ///
    /// Can be created using the [UserList::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct UserListBuilder<State>(State);

    impl UserListBuilder<()> {
        /// Setter for the [`users` field](UserList#structfield.users).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn users<T0>(self, value: T0) -> UserListBuilder<(T0,)>
        where
            T0: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::User>]>>,
        {
            UserListBuilder((value,))
        }

        /// Sets the [`users` field](UserList#structfield.users) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn users_as_null(self) -> UserListBuilder<((),)> {
            self.users(())
        }
    }

    impl<T0> UserListBuilder<(T0,)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [UserList].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<UserList>
        where
            Self: ::planus::WriteAsOffset<UserList>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::User>]>>,
        > ::planus::WriteAs<::planus::Offset<UserList>> for UserListBuilder<(T0,)>
    {
        type Prepared = ::planus::Offset<UserList>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<UserList> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::User>]>>,
        > ::planus::WriteAsOptional<::planus::Offset<UserList>> for UserListBuilder<(T0,)>
    {
        type Prepared = ::planus::Offset<UserList>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<UserList>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::User>]>>,
        > ::planus::WriteAsOffset<UserList> for UserListBuilder<(T0,)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<UserList> {
            let (v0,) = &self.0;
            UserList::create(builder, v0)
        }
    }

    /// Reference to a deserialized [UserList].
    #[derive(Copy, Clone)]
    pub struct UserListRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> UserListRef<'a> {
        /// Getter for the [`users` field](UserList#structfield.users).
        #[inline]
        pub fn users(&self) -> ::planus::Result<::core::option::Option<::planus::Vector<'a, ::planus::Result<self::UserRef<'a>>>>> {
            self.0.access(0, "UserList", "users")
        }
    }

    impl<'a> ::core::fmt::Debug for UserListRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("UserListRef");
            if let ::core::option::Option::Some(field_users) = self.users().transpose() {
                f.field("users", &field_users);
            }
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<UserListRef<'a>> for UserList {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: UserListRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                users: if let ::core::option::Option::Some(users) = value.users()? {
                    ::core::option::Option::Some(users.to_vec_result()?)
                } else {
                    ::core::option::Option::None
                },
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for UserListRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for UserListRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[UserListRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<UserList>> for UserList {
        type Value = ::planus::Offset<UserList>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<UserList>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for UserListRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| {
                error_kind.with_error_location("[UserListRef]", "read_as_root", 0)
            })
        }
    }

}
